pub mod grammar;

use std::io::BufRead;

pub use grammar::Grammar;

fn print_help() {
    println!("Usage: first-follow outputs [options] [grammar file]");
    println!("outputs:");
    println!("  prod: Productions");
    println!("  syms: Nonterminal and terminal inventories");
    println!("  first: FIRST set of every nonterminal");
    println!("  follow: FOLLOW set of every nonterminal");
    println!("  ff: FIRST and FOLLOW sets in one table");
    println!("options:");
    println!("  -h: Print this help");
    println!("  -l: Print in LaTeX format");
    println!("  -j: Print in JSON format");
    println!("With no grammar file the grammar is read from stdin.");
}

fn main() {
    env_logger::init();

    let mut outputs: Vec<&str> = Vec::new();
    let args = std::env::args().skip(1).collect::<Vec<String>>();
    let mut i: usize = 0;
    while i < args.len() && ["prod", "syms", "first", "follow", "ff"].contains(&args[i].as_str()) {
        outputs.push(args[i].as_str());
        i += 1;
    }

    enum OutputFormat {
        Plain,
        LaTeX,
        JSON,
    }
    let mut output_format = OutputFormat::Plain;

    while i < args.len() && ["-h", "--help", "-l", "-j"].contains(&args[i].as_str()) {
        if args[i] == "-h" || args[i] == "--help" {
            print_help();
            return;
        } else if args[i] == "-l" {
            output_format = OutputFormat::LaTeX;
        } else if args[i] == "-j" {
            output_format = OutputFormat::JSON;
        }
        i += 1;
    }

    if i + 1 < args.len() || outputs.is_empty() {
        print_help();
        return;
    }

    let parsed = if i == args.len() {
        let input: String = std::io::stdin()
            .lock()
            .lines()
            .map(|l| l.unwrap())
            .collect::<Vec<String>>()
            .join("\n");
        Grammar::parse(&input)
    } else {
        Grammar::from_file(args[i].as_str())
    };

    let g = match parsed {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let first = g.first_table();
    let follow = g.follow_table(&first);

    for output in outputs {
        if output == "prod" {
            let t = g.to_production_output();
            println!(
                "{}",
                match output_format {
                    OutputFormat::Plain => t.to_plaintext(),
                    OutputFormat::LaTeX => t.to_latex(),
                    OutputFormat::JSON => serde_json::to_string(&t).unwrap(),
                }
            );
        }
        if output == "syms" {
            let t = g.to_symbol_output();
            println!(
                "{}",
                match output_format {
                    OutputFormat::Plain => t.to_plaintext(),
                    OutputFormat::LaTeX => t.to_latex(),
                    OutputFormat::JSON => serde_json::to_string(&t).unwrap(),
                }
            );
        }
        if output == "first" {
            let t = g.to_first_output(&first);
            println!(
                "{}",
                match output_format {
                    OutputFormat::Plain => t.to_plaintext(),
                    OutputFormat::LaTeX => t.to_latex(),
                    OutputFormat::JSON => serde_json::to_string(&t).unwrap(),
                }
            );
        }
        if output == "follow" {
            let t = g.to_follow_output(&follow);
            println!(
                "{}",
                match output_format {
                    OutputFormat::Plain => t.to_plaintext(),
                    OutputFormat::LaTeX => t.to_latex(),
                    OutputFormat::JSON => serde_json::to_string(&t).unwrap(),
                }
            );
        }
        if output == "ff" {
            let t = g.to_first_follow_output(&first, &follow);
            println!(
                "{}",
                match output_format {
                    OutputFormat::Plain => t.to_plaintext(),
                    OutputFormat::LaTeX => t.to_latex(),
                    OutputFormat::JSON => serde_json::to_string(&t).unwrap(),
                }
            );
        }
    }
}
