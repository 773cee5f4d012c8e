use dateutils::{recognize, rules::FormatRule, Config, ParsedTimestamp};

const USAGE: &str = "\
usage: dateutils <parse|fuzzy> [--json] [--explain] <input...>

  parse    print the timestamp the input describes
  fuzzy    print how long ago the input was

env:
  DATEUTILS_NOW    reference instant for fuzzy, `@<unix seconds>` or a supported timestamp
  DATEUTILS_JSON   print JSON by default";

#[derive(Copy, Clone, Debug, PartialEq)]
enum Command {
    Parse,
    Fuzzy,
}

struct Args {
    command: Command,
    json: bool,
    explain: bool,
    input: String,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>, config: &Config) -> Option<Self> {
        let command = match args.next()?.as_str() {
            "parse" => Command::Parse,
            "fuzzy" => Command::Fuzzy,
            _ => return None,
        };

        let (mut json, mut explain) = (config.json, false);
        let mut words = vec![];
        for arg in args {
            match arg.as_str() {
                "--json" => json = true,
                "--explain" => explain = true,
                _ => words.push(arg),
            }
        }

        Some(Self {
            command,
            json,
            explain,
            input: words.join(" "),
        })
    }
}

fn render(args: &Args, ts: ParsedTimestamp, rule: &FormatRule, config: &Config) -> String {
    let rule = rule.name();

    match (args.command, args.json) {
        (Command::Parse, true) => serde_json::json!({
            "input": args.input,
            "timestamp": ts,
            "unix": ts.unix_timestamp(),
            "rule": rule,
        })
        .to_string(),
        (Command::Fuzzy, true) => serde_json::json!({
            "input": args.input,
            "timestamp": ts,
            "fuzzy": ts.fuzzy_since(config.now()),
            "rule": rule,
        })
        .to_string(),
        (Command::Parse, false) => ts.to_string(),
        (Command::Fuzzy, false) => ts.fuzzy_since(config.now()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_env_load::load_env_from([".dev.env"]);
    alto_logger::init_term_logger().expect("single initalization of logger");

    let config = Config::from_env()?;

    let Some(args) = Args::parse(std::env::args().skip(1), &config) else {
        eprintln!("{USAGE}");
        std::process::exit(1)
    };

    let (ts, rule) = match recognize(&args.input) {
        Ok(found) => found,
        Err(err) => {
            log::error!("{err}: {input:?}", input = err.input());
            std::process::exit(1)
        }
    };

    if args.explain {
        log::info!("{input:?} recognized as '{rule}'", input = args.input);
    }

    println!("{}", render(&args, ts, rule, &config));
    Ok(())
}
