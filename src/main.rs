use std::{env, fs::read_to_string, process::exit};

use golite::lexer::lexer::tokenize;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: golite <source-file>");
        exit(2);
    }

    let file_path = &args[1];
    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("failed to read {}: {}", file_path, err);
            exit(2);
        }
    };

    let (tokens, errors) = tokenize(&source);

    for token in &tokens {
        println!("{}", token);
    }

    if !errors.is_empty() {
        println!();
        for error in &errors {
            println!("{}", error);
        }
        exit(1);
    }
}
