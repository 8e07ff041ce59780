use std::io::{self, Read, Write};

use clap::Parser;
use commit_tidy::*;
use style::icons;

/// Load config from args or use the built-in rules
fn load_config_from_args(args: &Args) -> Result<TidyConfig> {
   if let Some(ref config_path) = args.config {
      TidyConfig::from_file(config_path)
   } else {
      Ok(TidyConfig::default())
   }
}

/// Read the raw message from the message file, or all of stdin
fn read_input(args: &Args) -> Result<String> {
   let bytes = if let Some(ref path) = args.file {
      std::fs::read(path)?
   } else {
      let mut buf = Vec::new();
      io::stdin().lock().read_to_end(&mut buf)?;
      buf
   };
   Ok(String::from_utf8(bytes)?)
}

/// Write the rewritten message back to the message file, or to stdout
fn write_output(args: &Args, message: &str) -> Result<()> {
   if let Some(ref path) = args.file {
      std::fs::write(path, message)?;
   } else {
      let mut stdout = io::stdout().lock();
      stdout.write_all(message.as_bytes())?;
      stdout.flush()?;
   }
   Ok(())
}

/// Print which rewrite steps fired
fn print_report(original: &str, outcome: &RewriteOutcome, config: &TidyConfig) {
   let steps = outcome.steps(config);
   if steps.is_empty() {
      eprintln!(
         "{} {}",
         style::success(icons::SUCCESS),
         style::dim("subject already normalized")
      );
      return;
   }

   eprintln!(
      "{} {} {} {}",
      style::dim("subject:"),
      original,
      style::dim(icons::ARROW),
      style::subject(&outcome.subject)
   );
   for step in steps {
      eprintln!("  {} {}", style::dim(icons::BULLET), step);
   }
}

/// Parse raw hook input and rewrite its subject
fn process(raw: &str, config: &TidyConfig) -> (CommitMessage, CommitMessage, RewriteOutcome) {
   let original = CommitMessage::parse(raw);
   let (rewritten, outcome) = rewrite_message(&original, config);
   (original, rewritten, outcome)
}

fn run(args: &Args) -> Result<()> {
   let config = load_config_from_args(args)?;
   let raw = read_input(args)?;
   let (original, rewritten, outcome) = process(&raw, &config);

   if args.verbose {
      print_report(&original.subject, &outcome, &config);
   }

   if args.check {
      if rewritten.subject != original.subject {
         return Err(TidyError::NonCompliant {
            original:  original.subject,
            rewritten: rewritten.subject,
            problems:  outcome.steps(&config),
         });
      }
      return Ok(());
   }

   write_output(args, &rewritten.render())
}

fn main() {
   let args = Args::parse();

   if let Err(err) = run(&args) {
      match err {
         TidyError::NonCompliant { original, rewritten, problems } => {
            style::warn(&format!("subject is not normalized: {original}"));
            for problem in problems {
               eprintln!("  {} {}", style::dim(icons::BULLET), problem);
            }
            eprintln!("  {} {}", style::dim("expected:"), style::subject(&rewritten));
         },
         other => style::fail(&other.to_string()),
      }
      std::process::exit(1);
   }
}
