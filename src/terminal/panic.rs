//! Error and panic reporting that leaves the terminal usable.

use std::panic;

use color_eyre::config::HookBuilder;

use super::setup::emergency_restore;

/// Install color-eyre's report handlers, wrapping the panic handler so the
/// terminal is restored before the report is printed.
///
/// Replaces a plain `color_eyre::install()` call.
pub fn install_hooks() -> color_eyre::Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    let panic_hook = panic_hook.into_panic_hook();
    panic::set_hook(Box::new(move |info| {
        emergency_restore();
        tracing::error!("panic: {}", info);
        panic_hook(info);
    }));
    Ok(())
}
