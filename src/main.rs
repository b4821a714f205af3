use anyhow::Result;
use clap::{App as ClapApp, Arg, ArgMatches, SubCommand};
use log::*;
use shortcut_profiles::{
    app::{App, Command},
    config::Config,
    logger::SessionLogger,
};

fn main() -> Result<()> {
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("allow-single-key")
                .long("allow-single-key")
                .help("Do not warn about single key shortcuts"),
        )
        .subcommand(SubCommand::with_name("list").about("List keyboard profiles"))
        .subcommand(
            SubCommand::with_name("check")
                .about("Validate every shortcut of a profile")
                .arg(profile_arg()),
        )
        .subcommand(
            SubCommand::with_name("normalize")
                .about("Drop conflicting shortcuts and save the profile normalized")
                .arg(profile_arg()),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if matches.is_present("allow-single-key") {
        config.single_key_shortcuts_allowed = true;
    }

    let logger = SessionLogger::new(config.log_level_filter()?);
    logger.set_sink(Box::new(|line: String| eprintln!("{}", line)));
    logger.install()?;

    let command = match matches.subcommand() {
        ("list", _) => Command::List,
        ("check", sub) => Command::Check {
            profile: profile_name(sub),
        },
        ("normalize", sub) => Command::Normalize {
            profile: profile_name(sub),
        },
        _ => Command::Check { profile: None },
    };

    let app = App::new(config)?;
    let mut stdout = std::io::stdout();
    if !app.run(command, &mut stdout)? {
        error!("Profile contains conflicting shortcuts.");
        std::process::exit(1);
    }
    Ok(())
}

fn profile_arg() -> Arg<'static, 'static> {
    Arg::with_name("PROFILE")
        .help("Profile name, defaults to the configured profile")
        .index(1)
}

fn profile_name(matches: Option<&ArgMatches>) -> Option<String> {
    matches
        .and_then(|m| m.value_of("PROFILE"))
        .map(str::to_string)
}
