use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "rpn", about = "Compile infix arithmetic to RPN and evaluate it")]
struct Options {
    /// Also print the RPN form of each expression
    #[arg(long)]
    rpn: bool,

    /// Also print each expression back in infix form
    #[arg(long)]
    infix: bool,

    /// History file for the interactive prompt [default: ~/.rpn_history]
    #[arg(long)]
    history: Option<PathBuf>,

    /// Expression to evaluate. Without one an interactive prompt starts.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expr: Vec<String>,
}

mod repl {
    use super::Options;

    pub fn evalexpr(opts: &Options, input: &str) -> Result<(), rpn::Error> {
        let expr = rpn::compile(input)?;
        if opts.rpn {
            println!("rpn: {}", expr);
        }
        if opts.infix {
            println!("infix: {}", expr.to_infix()?);
        }
        let result = expr.evaluate()?;
        println!("{}", result.value());
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    use rustyline::error::ReadlineError;

    env_logger::builder().format_timestamp(None).init();
    let opts = Options::parse();

    if !opts.expr.is_empty() {
        let input = opts.expr.join(" ");
        repl::evalexpr(&opts, &input)?;
        return Ok(());
    }

    let histpath = opts
        .history
        .clone()
        .or_else(|| dirs::home_dir().map(|h| h.join(".rpn_history")));
    let mut rl = rustyline::DefaultEditor::new()?;
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            log::info!("no history yet at {}", path.display());
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    log::warn!("failed to record history entry: {}", e);
                }
                if let Err(e) = repl::evalexpr(&opts, &line) {
                    println!("{}", e);
                }
            }
        }
    }
    if let Some(path) = &histpath {
        rl.save_history(path)?;
    }
    Ok(())
}
