use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;
use morphmatch::{
    front_end::{parse, Document},
    matching::{GraphMatcher, MatcherConfig},
};
use std::error::Error;

fn read_document(matches: &ArgMatches) -> Result<Document, Box<dyn Error>> {
    let path = matches.value_of("FILE").unwrap();
    let input = std::fs::read_to_string(path)?;
    let document = parse(&input)?;
    info!(
        "read {} graphs and {} morphisms from {}",
        document.graphs().len(),
        document.morphisms().len(),
        path
    );
    Ok(document)
}

fn handle_match(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let document = read_document(matches)?;
    let pattern = document.graph(matches.value_of("PATTERN").unwrap())?;
    let host = document.graph(matches.value_of("HOST").unwrap())?;
    let injective = matches.is_present("injective");
    let config = MatcherConfig::default()
        .engine(matches.value_of("engine").unwrap().parse()?)
        .state_hashing(!matches.is_present("no-state-hashing"));
    let mut matcher = GraphMatcher::new(config);
    match matches.value_of("mode").unwrap() {
        "all" => {
            for morphism in matcher.all_matches(&pattern, &host, injective)? {
                println!("{}", morphism);
            }
        }
        "one" => match matcher.random_match(&pattern, &host, injective)? {
            Some(morphism) => println!("{}", morphism),
            None => println!("no match"),
        },
        "exists" => println!("{}", matcher.exist_match(&pattern, &host, injective)),
        _ => unreachable!(),
    }
    Ok(())
}

fn handle_typed(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let document = read_document(matches)?;
    let typed_pattern = document.morphism(matches.value_of("TYPED_PATTERN").unwrap())?;
    let typed_host = document.morphism(matches.value_of("TYPED_HOST").unwrap())?;
    for morphism in GraphMatcher::default().all_typed_matches(&typed_pattern, &typed_host)? {
        println!("{}", morphism);
    }
    Ok(())
}

fn cli() -> App<'static, 'static> {
    let file = Arg::with_name("FILE")
        .help("File with graph and morphism definitions")
        .required(true)
        .index(1);
    App::new("morphmatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("match")
                .about("Matches a pattern graph into a host graph")
                .arg(file.clone())
                .arg(Arg::with_name("PATTERN").required(true).index(2))
                .arg(Arg::with_name("HOST").required(true).index(3))
                .arg(
                    Arg::with_name("injective")
                        .long("injective")
                        .help("Only reports injective matches"),
                )
                .arg(
                    Arg::with_name("engine")
                        .long("engine")
                        .takes_value(true)
                        .possible_values(&["csp", "legacy"])
                        .default_value("csp"),
                )
                .arg(
                    Arg::with_name("no-state-hashing")
                        .long("no-state-hashing")
                        .help("Lets the legacy engine revisit equal states"),
                )
                .arg(
                    Arg::with_name("mode")
                        .long("mode")
                        .takes_value(true)
                        .possible_values(&["all", "one", "exists"])
                        .default_value("all"),
                ),
        )
        .subcommand(
            SubCommand::with_name("typed")
                .about("Matches a typed pattern into a typed host")
                .arg(file)
                .arg(Arg::with_name("TYPED_PATTERN").required(true).index(2))
                .arg(Arg::with_name("TYPED_HOST").required(true).index(3)),
        )
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = cli().get_matches();
    if let Some(matches) = matches.subcommand_matches("match") {
        handle_match(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("typed") {
        handle_typed(matches)?;
    }
    Ok(())
}
