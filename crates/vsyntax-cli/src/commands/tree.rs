use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

pub struct TreeArgs {
    pub file: PathBuf,
    pub raw: bool,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: TreeArgs) {
    let source = load_source(&args.file);
    let display = args.file.display().to_string();

    let (parse, diagnostics) = match vsyntax::parse(&source) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {display}: {e}");
            std::process::exit(1);
        }
    };

    let tree = if args.raw {
        parse.dump(args.spans)
    } else {
        parse.sexp()
    };
    print!("{tree}");
    if !tree.ends_with('\n') {
        println!();
    }

    let diagnostics = diagnostics.filtered();
    if !diagnostics.is_empty() {
        let rendered = diagnostics
            .printer()
            .source(&source)
            .path(&display)
            .colored(args.color)
            .render();
        eprint!("{rendered}");
    }
}

fn load_source(path: &Path) -> String {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {e}");
            std::process::exit(1);
        }
        return buf;
    }
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("error: cannot read {}: {e}", path.display());
        std::process::exit(1);
    })
}
