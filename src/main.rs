use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;
use quiz_drills::{QuizError, Summary, load_questions_from_json, nested};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File that receives log output (filtered by RUST_LOG)
    #[arg(long, default_value = "quiz-drills.log")]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the questions as CSV
    Csv {
        /// JSON file to load the questions from
        #[arg(short, long)]
        questions: PathBuf,
    },
    /// Print counts and point totals for the questions
    Summary {
        /// JSON file to load the questions from
        #[arg(short, long)]
        questions: PathBuf,
    },
    /// Run the colored box and double/half widgets in the terminal
    Widgets,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = quiz_drills::logging::init_file_logger(&args.log_file) {
        eprintln!("Error opening log file {}: {}", args.log_file.display(), e);
        std::process::exit(1);
    }

    if let Err(e) = run(args.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), QuizError> {
    info!("Running {:?}", command);
    match command {
        Command::Csv { questions } => {
            let questions = load_questions_from_json(questions)?;
            println!("{}", nested::to_csv(&questions));
        }
        Command::Summary { questions } => {
            let questions = load_questions_from_json(questions)?;
            println!("{}", Summary::from_questions(&questions));
        }
        Command::Widgets => quiz_drills::run_widgets()?,
    }
    Ok(())
}
