//! Interactive console for the rucrypt cipher engines.
//!
//! Thin front end: prompts for keys and text on stdin, runs the selected
//! engine, prints the result or the error kind. No cipher logic lives here.

use std::io::{self, Write};

use rucrypt::{Cipher, GronsfeldCipher, RouteCipher};

fn main() {
    println!("=== rucrypt: classical Russian-alphabet ciphers ===");
    loop {
        print_menu();
        match read_line("Choose an action: ").as_str() {
            "1" => run_gronsfeld(Mode::Encrypt),
            "2" => run_gronsfeld(Mode::Decrypt),
            "3" => run_route(Mode::Encrypt),
            "4" => run_route(Mode::Decrypt),
            "5" => print_help(),
            "6" => break,
            other => println!("Unknown action: '{}'", other),
        }
    }
}

enum Mode {
    Encrypt,
    Decrypt,
}

fn print_menu() {
    println!();
    println!("1. Gronsfeld: encrypt");
    println!("2. Gronsfeld: decrypt");
    println!("3. Route transposition: encrypt");
    println!("4. Route transposition: decrypt");
    println!("5. Help");
    println!("6. Exit");
}

fn print_help() {
    println!();
    println!("Gronsfeld substitution: the key is a word of Russian letters;");
    println!("each letter's alphabet position becomes a cyclic shift mod 32.");
    println!("Route transposition: the key is a column count (1..=1000);");
    println!("text is written into a grid by rows and read out by columns,");
    println!("right to left. Text may contain letters and spaces only.");
}

fn run_gronsfeld(mode: Mode) {
    let key = read_line("Enter the key word: ");
    let cipher = match GronsfeldCipher::new(&key) {
        Ok(cipher) => cipher,
        Err(err) => {
            println!("Key error: {}", err);
            return;
        }
    };
    apply(&cipher, mode);
}

fn run_route(mode: Mode) {
    let cipher = loop {
        let input = read_line("Enter the key (column count): ");
        let key: i32 = match input.parse() {
            Ok(key) => key,
            Err(_) => {
                println!("The key must be an integer, got '{}'", input);
                continue;
            }
        };
        match RouteCipher::new(key) {
            Ok(cipher) => break cipher,
            Err(err) => println!("Key error: {}", err),
        }
    };
    apply(&cipher, mode);
}

fn apply(cipher: &dyn Cipher, mode: Mode) {
    let text = read_line("Enter the text: ");
    let result = match mode {
        Mode::Encrypt => cipher.encrypt(&text),
        Mode::Decrypt => cipher.decrypt(&text),
    };
    match result {
        Ok(output) => println!("Result: {}", output),
        Err(err) => println!("Error: {}", err),
    }
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().unwrap();
    let mut line = String::new();
    io::stdin().read_line(&mut line).unwrap();
    line.trim_end_matches(['\r', '\n']).to_string()
}
