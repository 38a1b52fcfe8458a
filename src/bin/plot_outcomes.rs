use env_logger::Env;
use log::info;
use outcome_plot::error::RecordError;
use outcome_plot::plot_outcomes::parse_cli;
use outcome_plot::{Outcomes, USAGE};

fn main() -> Result<(), RecordError> {
    let (datafile, verbose) = parse_cli();

    let level = if verbose { "info" } else { "warn" };
    let env = Env::default().filter_or("OUTCOME_PLOT_LOG", level);
    let _ = env_logger::try_init_from_env(env);

    let datafile = match datafile {
        Some(p) => p,
        None => {
            println!("{}", USAGE);
            std::process::exit(-1);
        }
    };

    info!("read data from {} and plot to the working directory", datafile.display());
    let outcomes = Outcomes::from_file(&datafile)?;
    info!("\n{}", outcomes);
    outcomes.plot_all(".")?;
    Ok(())
}
