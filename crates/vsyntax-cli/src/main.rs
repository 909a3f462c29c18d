mod cli;
mod colors;
mod commands;
mod logging;

use cli::{CheckParams, GrammarParams, TreeParams, build_cli};

fn main() {
    logging::init();
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("tree", m)) => {
            let params = TreeParams::from_matches(m);
            commands::tree::run(params.into());
        }
        Some(("grammar", m)) => {
            let params = GrammarParams::from_matches(m);
            commands::grammar::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
