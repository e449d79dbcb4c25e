use std::io::{self, BufRead, Write};

use wordle_chat::{
    bot::WordleBot, render, Command, Status, WordList, WordleError,
};

fn main() {
    env_logger::init();

    let bot = WordleBot::new(WordList::default());
    let mut rng = rand::thread_rng();

    println!("wordle_chat — type `wordle start [length]` to play, ctrl-d to quit");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().unwrap();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let command = match Command::parse(&line) {
            Some(command) => command,
            None => {
                println!("try `wordle start`, `wordle hint`, `wordle stop`, or a guess");
                continue;
            }
        };

        match command {
            Command::Start { length } => match bot.start_game("cli", length, &mut rng) {
                Ok(info) => println!(
                    "new game: {} letters, {} attempts",
                    info.word_length, info.max_attempts
                ),
                Err(e) => report(e),
            },
            Command::Stop => match bot.stop("cli") {
                Ok(()) => println!("game abandoned"),
                Err(e) => report(e),
            },
            Command::Hint => match bot.hint("cli") {
                Ok(Some(hint)) => println!("hint: {}", hint),
                Ok(None) => println!("nothing to reveal yet"),
                Err(e) => report(e),
            },
            Command::Guess(word) => match bot.guess("cli", word) {
                Ok(reply) => {
                    log::debug!("guess {} scored, status {:?}", word, reply.status);
                    print!("{}", render::render_ansi(&reply.grid));
                    match reply.status {
                        Status::Won => {
                            println!("you got it! the word was {}", reply.answer.unwrap())
                        }
                        Status::Exhausted => {
                            println!("out of guesses; the word was {}", reply.answer.unwrap())
                        }
                        Status::Active => {
                            println!("guess {}/{}", reply.attempts, reply.max_attempts)
                        }
                    }
                }
                Err(e) => report(e),
            },
        }
    }
}

fn report(error: WordleError) {
    match error {
        WordleError::Game { kind } => println!("{}", kind),
        other => println!("{}", other),
    }
}
