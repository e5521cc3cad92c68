use crate::config::ConfigProvider;
use crate::greeting::write_greeting;
use crate::utils::error::Result;
use std::io::Write;

/// Writes the greeting for the configured name to `out` as a single line.
pub fn run<C: ConfigProvider, W: Write>(config: &C, out: &mut W) -> Result<()> {
    let name = config.name();
    tracing::debug!("Greeting name: {:?}", name);

    write_greeting(out, name)?;
    out.flush()?;

    tracing::debug!("Greeting written");
    Ok(())
}
