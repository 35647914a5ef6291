mod describe;
mod distribution;
mod input;
mod pretty;
mod smooth;

use bpaf::Bpaf;
use describe::*;
use distribution::*;
use smooth::*;

/// Statistics over the numeric columns of a CSV file read from stdin
#[derive(Debug, Clone, Bpaf)]
#[bpaf(options, version)]
enum Subcommand {
    /// Print summary statistics for each column
    #[bpaf(command)]
    Describe(#[bpaf(external(describe_options))] DescribeOptions),
    /// Print how often each value occurs, as JSON
    #[bpaf(command)]
    Distribution(#[bpaf(external(distribution_options))] DistributionOptions),
    /// Smooth each column with a simple moving average (gaps are skipped)
    #[bpaf(command)]
    Sma(#[bpaf(external(sma_options))] SmaOptions),
    /// Smooth each column with an exponential moving average (gaps are skipped)
    #[bpaf(command)]
    Ema(#[bpaf(external(ema_options))] EmaOptions),
}

fn main() {
    env_logger::init();
    let result = match subcommand().run() {
        Subcommand::Describe(opts) => describe(opts),
        Subcommand::Distribution(opts) => distribution(opts),
        Subcommand::Sma(opts) => sma(opts),
        Subcommand::Ema(opts) => ema(opts),
    };
    match result {
        Ok(()) => (),
        Err(e) => {
            // Ignore EPIPE
            if let Some(e) = e.downcast_ref::<std::io::Error>() {
                if e.kind() == std::io::ErrorKind::BrokenPipe {
                    return;
                }
            }
            eprintln!("Error: {:#}", e);
            std::process::exit(1)
        }
    }
}
