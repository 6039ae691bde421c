use std::{env, fs::read_to_string, process::exit, time::Instant};

use tokenizer::{
    display_error,
    errors::errors::Error,
    lexer::{lexer::tokenize, tokens::TokenKind},
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();
    let tokens = tokenize(file_contents.clone(), Some(String::from(file_name)));
    println!("Tokenized in {:?}", start.elapsed());

    let mut illegal_count = 0;

    for token in &tokens {
        if token.kind == TokenKind::Illegal {
            display_error(&Error::from_illegal(token), &file_contents);
            illegal_count += 1;
        } else {
            token.debug();
        }
    }

    if illegal_count > 0 {
        println!("Found {} illegal token(s)", illegal_count);
        exit(1);
    }
}
