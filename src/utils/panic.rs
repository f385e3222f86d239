//! Panic hook: restore the terminal first, then report.
//!
//! Debug builds print a full `better-panic` backtrace; release builds write a
//! `human-panic` crash dump. Both log the color-eyre report.

use std::{panic::PanicHookInfo, process};

use color_eyre::{config::HookBuilder, eyre::Result};

use crate::{
    infrastructure::tui::{real::RealTui, TuiLike},
    utils::logging::log_path,
};

pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "WorldAware crashed. The log at {} may help; please report it at {}",
            log_path().display(),
            env!("CARGO_PKG_REPOSITORY")
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();

        let report = panic_hook.panic_report(info).to_string();
        log::error!("Panic: {}", strip_ansi_escapes::strip_str(&report));

        #[cfg(not(debug_assertions))]
        print_crash_dump(info, &report);

        #[cfg(debug_assertions)]
        print_backtrace(info);

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

fn restore_terminal() {
    match RealTui::new() {
        Ok(mut tui) => {
            if let Err(e) = tui.exit() {
                log::error!("Unable to restore terminal after panic: {e:?}");
            }
        }
        Err(e) => log::error!("Unable to open terminal after panic: {e:?}"),
    }
}

#[cfg(not(debug_assertions))]
fn print_crash_dump(info: &PanicHookInfo<'_>, report: &str) {
    use human_panic::{handle_dump, print_msg, Metadata};

    let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
        .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "))
        .homepage(env!("CARGO_PKG_HOMEPAGE"));
    let dump = handle_dump(&meta, info);
    if let Err(e) = print_msg(dump, &meta) {
        log::error!("Unable to print crash report: {e}");
    }
    eprintln!("{report}");
}

#[cfg(debug_assertions)]
fn print_backtrace(info: &PanicHookInfo<'_>) {
    better_panic::Settings::auto()
        .most_recent_first(false)
        .lineno_suffix(true)
        .verbosity(better_panic::Verbosity::Full)
        .create_panic_handler()(info);
}
