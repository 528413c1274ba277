use clap::Parser;
use log::info;
use multipractice::{Difficulty, Quiz, QuizError, QuizSettings};

#[derive(Parser, Debug)]
#[command(version, about = "Practice multiplication tables in the terminal", long_about = None)]
struct Args {
    /// Preset difficulty: easy, medium or hard
    #[arg(short, long, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Highest table to practice (switches to custom settings)
    #[arg(short = 't', long)]
    highest_table: Option<u32>,

    /// Number of questions (switches to custom settings)
    #[arg(short, long)]
    questions: Option<usize>,

    /// Seed for a reproducible question order
    #[arg(long)]
    seed: Option<u64>,

    /// Print the question bank for the chosen settings as JSON and exit
    #[arg(long)]
    dump_bank: bool,
}

impl Args {
    fn settings(&self) -> Result<QuizSettings, QuizError> {
        let preset = QuizSettings::from_difficulty(self.difficulty);
        if self.highest_table.is_none() && self.questions.is_none() {
            return Ok(preset);
        }

        QuizSettings::custom(
            self.highest_table.unwrap_or(preset.highest_table()),
            self.questions.unwrap_or(preset.question_amount()),
        )
    }
}

fn run(args: Args) -> Result<(), QuizError> {
    let settings = args.settings()?;
    info!("resolved settings: {:?}", settings);

    if args.dump_bank {
        println!("{}", settings.build_bank()?.to_json()?);
        return Ok(());
    }

    let quiz = match args.seed {
        Some(seed) => Quiz::with_seed(settings, seed),
        None => Quiz::new(settings),
    };
    quiz.run()
}

fn main() {
    pretty_env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
