//! Best-effort reload signal for the status bar.
//!
//! Waybar re-reads its configuration on SIGUSR2. The save operation is
//! considered complete once the override file is written, so every failure
//! here is swallowed and only logged at debug level.

use log::debug;

/// Ask the status-bar process to re-read its configuration.
pub fn reload_status_bar(process_name: &str) {
    #[cfg(target_os = "linux")]
    {
        use nix::sys::signal::{kill, Signal};
        use nix::unistd::Pid;

        let pids = pids_by_name(process_name);
        if pids.is_empty() {
            debug!("No {process_name} process found to signal");
            return;
        }
        for pid in pids {
            match kill(Pid::from_raw(pid), Signal::SIGUSR2) {
                Ok(()) => debug!("Sent SIGUSR2 to {process_name} ({pid})"),
                Err(e) => debug!("Failed to signal {process_name} ({pid}): {e}"),
            }
        }
    }

    #[cfg(not(target_os = "linux"))]
    {
        debug!("Status-bar reload not supported on this platform ({process_name})");
    }
}

/// Find process ids whose comm matches the given name.
#[cfg(target_os = "linux")]
fn pids_by_name(name: &str) -> Vec<i32> {
    let entries = match std::fs::read_dir("/proc") {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    entries
        .flatten()
        .filter_map(|entry| {
            let pid: i32 = entry.file_name().to_str()?.parse().ok()?;
            let comm = std::fs::read_to_string(entry.path().join("comm")).ok()?;
            (comm.trim() == name).then_some(pid)
        })
        .collect()
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_process_yields_no_pids() {
        assert!(pids_by_name("skybar-no-such-process").is_empty());
    }

    #[test]
    fn test_finds_own_process() {
        let own_comm = std::fs::read_to_string("/proc/self/comm").unwrap();
        let pids = pids_by_name(own_comm.trim());
        assert!(pids.contains(&(std::process::id() as i32)));
    }

    #[test]
    fn test_reload_with_absent_process_is_silent() {
        // Must neither panic nor error
        reload_status_bar("skybar-no-such-process");
    }
}
