use std::{
    fs::OpenOptions,
    io::{stdout, Write},
};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use sedge::{Options, Selector};

fn cli() -> Command {
    Command::new("sedge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A chainable CSS selector builder written purely in Rust")
        .disable_version_flag(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("version")
                .action(ArgAction::Version)
                .long("version")
                .short('v')
                .global(true),
        )
        .arg(
            Arg::new("ELEMENT")
                .short('e')
                .long("element")
                .help("Type selector to start with, e.g. `div`")
                .num_args(1),
        )
        .arg(
            Arg::new("ID")
                .long("id")
                .help("Id selector, without the leading `#`")
                .num_args(1),
        )
        .arg(
            Arg::new("CLASS")
                .short('c')
                .long("class")
                .help("Class selector, without the leading `.`. May be passed multiple times.")
                .action(ArgAction::Append)
                .value_parser(value_parser!(String))
                .num_args(1),
        )
        .arg(
            Arg::new("ATTRIBUTE")
                .short('a')
                .long("attr")
                .help("Raw attribute expression, e.g. `href$=\".png\"`. May be passed multiple times.")
                .action(ArgAction::Append)
                .value_parser(value_parser!(String))
                .num_args(1),
        )
        .arg(
            Arg::new("PSEUDO_CLASS")
                .short('p')
                .long("pseudo-class")
                .help("Pseudo-class, without the leading `:`. May be passed multiple times.")
                .action(ArgAction::Append)
                .value_parser(value_parser!(String))
                .num_args(1),
        )
        .arg(
            Arg::new("PSEUDO_ELEMENT")
                .short('P')
                .long("pseudo-element")
                .help("Pseudo-element, without the leading `::`")
                .num_args(1),
        )
        .arg(
            Arg::new("QUIET")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Don't warn about pseudo-class or pseudo-element names not defined by CSS"),
        )
        .arg(
            Arg::new("OUTPUT")
                .short('o')
                .long("output")
                .help("Output file, stdout otherwise")
                .num_args(1),
        )
}

fn build(matches: &ArgMatches) -> sedge::Result<Selector> {
    let mut selector = Selector::new();

    if let Some(element) = matches.get_one::<String>("ELEMENT") {
        selector = selector.element(element.as_str())?;
    }

    if let Some(id) = matches.get_one::<String>("ID") {
        selector = selector.id(id.as_str())?;
    }

    if let Some(classes) = matches.get_many::<String>("CLASS") {
        for class in classes {
            selector = selector.class(class.as_str())?;
        }
    }

    if let Some(attributes) = matches.get_many::<String>("ATTRIBUTE") {
        for attribute in attributes {
            selector = selector.attr(attribute.as_str())?;
        }
    }

    if let Some(pseudo_classes) = matches.get_many::<String>("PSEUDO_CLASS") {
        for pseudo_class in pseudo_classes {
            selector = selector.pseudo_class(pseudo_class.as_str())?;
        }
    }

    if let Some(pseudo_element) = matches.get_one::<String>("PSEUDO_ELEMENT") {
        selector = selector.pseudo_element(pseudo_element.as_str())?;
    }

    Ok(selector)
}

fn main() -> std::io::Result<()> {
    let matches = cli().get_matches();

    let options = &Options::default().quiet(matches.get_flag("QUIET"));

    let mut selector = build(&matches).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1)
    });

    selector.lint(options);

    let (mut stdout_write, mut file_write);
    let buf_out: &mut dyn Write = if let Some(path) = matches.get_one::<String>("OUTPUT") {
        file_write = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        &mut file_write
    } else {
        stdout_write = stdout();
        &mut stdout_write
    };

    writeln!(buf_out, "{}", selector.stringify())?;

    Ok(())
}
