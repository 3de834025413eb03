//! Digits of pi from the Chudnovsky series, evaluated by binary splitting on
//! GMP integers and finished with one MPFR division and square root.

pub mod assemble;
pub mod config;
pub mod error;
pub mod precision;
pub mod series;
pub mod split;

use rug::float::Round;
use tracing::{debug, instrument};

pub use config::PiConfig;
pub use error::{PiError, Result};
pub use precision::{parse_digits, Precision};
pub use series::Triple;

/// `"3."` followed by exactly `config.digits` digits, truncated.
#[instrument(skip_all, fields(digits = config.digits, threads = config.threads))]
pub fn compute_pi(config: &PiConfig) -> Result<String> {
    let prec = Precision::from_digits(config.digits)?;
    let terms = series::term_count(prec.bits());
    debug!(terms, bits = prec.bits(), "splitting");

    let triple = match config.effective_threads() {
        1 => split::split(0, terms, false),
        threads => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .use_current_thread()
                .build()?;
            pool.install(|| split::split_parallel(0, terms, false, config::PARALLEL_GRAIN))
        }
    };
    debug!(q_bits = triple.q.significant_bits(), "done splitting");

    let pi = assemble::assemble(&triple, prec);
    debug!("done assembling");

    assemble::to_fixed(&pi, prec, Round::Zero)
}

/// [`compute_pi`] on the calling thread.
pub fn pi_digits(digits: u64) -> Result<String> {
    compute_pi(&PiConfig::new(digits))
}
