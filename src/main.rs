use clap::{Parser, Subcommand};
use finprog::{answers_match, programs_equivalent, programs_match, run_program, tokenize, Value};

/// finprog executes and compares the arithmetic programs produced for
/// conversational financial question answering.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Executes a program string and prints its answer.
    Eval {
        /// The program to run, e.g. "subtract(100, 50), divide(#0, 50)".
        program: String,
    },
    /// Checks whether two programs are symbolically equivalent.
    Compare {
        /// The reference program. Its literals name the symbols both
        /// programs are rewritten over.
        first:  String,
        /// The candidate program.
        second: String,
    },
    /// Scores a predicted program against a gold turn.
    Score {
        /// The gold program.
        #[arg(long)]
        gold:        String,
        /// The predicted program.
        #[arg(long)]
        pred:        String,
        /// The gold executed answer. When given, the predicted program is
        /// also executed and its answer checked against this value.
        #[arg(long)]
        gold_answer: Option<String>,
    },
}

fn main() {
    let args = Args::parse();

    match args.command {
        Command::Eval { program } => {
            match run_program(&program) {
                Some(Value::Number(number)) => println!("{number}"),
                Some(decision)              => println!("{decision}"),
                None                        => println!("n/a"),
            }
        },
        Command::Compare { first, second } => {
            let verdict = programs_equivalent(&tokenize(&first), &tokenize(&second));

            println!("{}", if verdict { "equivalent" } else { "not equivalent" });
        },
        Command::Score { gold, pred, gold_answer } => {
            let program_verdict = programs_match(&pred, &gold);

            println!("program: {}", if program_verdict { "match" } else { "no match" });

            if let Some(gold_answer) = gold_answer {
                let predicted      = run_program(&pred);
                let answer_verdict = answers_match(predicted.as_ref(), &gold_answer);

                println!("answer: {}", if answer_verdict { "match" } else { "no match" });
            }
        },
    }
}
