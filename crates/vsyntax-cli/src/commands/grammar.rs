use vsyntax::contract;

pub struct GrammarArgs {
    pub node_types: bool,
}

pub fn run(args: GrammarArgs) {
    let json = if args.node_types {
        vsyntax_core::node_types_to_json(&contract::node_types()).map_err(|e| e.to_string())
    } else {
        contract::grammar_info().to_json().map_err(|e| e.to_string())
    };

    match json {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
