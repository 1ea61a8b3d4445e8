//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Clipboard handler

use arboard::Clipboard;
use log::{debug, info, warn};
use std::io::{BufRead, BufReader, Read, Write};
use std::time::Duration;
use std::{env, process};

use crate::error::{PassGenError, Result};

/// Set on the helper process that owns the clipboard. Holds the delay in seconds.
pub const DAEMON_ENV: &str = "RPAWOGEN_CLIPBOARD_DAEMON";
/// First stdout line of a helper that opened the clipboard.
pub const DAEMON_READY: &str = "ready";
const DAEMON_FAILED: &str = "failed: ";

/// Clear only if the clipboard still holds what we put there.
pub fn should_clear(current_content: &str, secret: &str) -> bool {
    !secret.is_empty() && current_content == secret
}

/// Delay requested for this process when it was started as the clipboard helper.
pub fn daemon_delay() -> Option<u64> {
    env::var(DAEMON_ENV).ok()?.parse().ok()
}

/// Interpret the helper's status line. Anything but `DAEMON_READY` means the
/// clipboard was never written.
pub fn parse_daemon_status(line: &str) -> Result<()> {
    let line = line.trim_end();
    if line == DAEMON_READY {
        return Ok(());
    }
    match line.strip_prefix(DAEMON_FAILED) {
        Some(reason) => Err(PassGenError::clipboard(reason)),
        None => Err(PassGenError::clipboard("clipboard helper exited without reporting")),
    }
}

// X11 and Wayland serve the selection from the owning process, so the helper
// keeps ownership until the deadline (or forever when 0) or until another
// program takes the clipboard.
#[cfg(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))))]
fn hold_text(ctx: &mut Clipboard, secret: &str, delay_secs: u64) -> Result<()> {
    use arboard::SetExtLinux;
    use std::time::Instant;

    let set = ctx.set();
    let set = if delay_secs > 0 {
        set.wait_until(Instant::now() + Duration::from_secs(delay_secs))
    } else {
        set.wait()
    };
    set.text(secret).map_err(|e| PassGenError::clipboard(e.to_string()))
}

#[cfg(not(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten")))))]
fn hold_text(_ctx: &mut Clipboard, _secret: &str, delay_secs: u64) -> Result<()> {
    std::thread::sleep(Duration::from_secs(delay_secs));
    Ok(())
}

/// Body of the helper process: take the secret from stdin, write it to the
/// clipboard, report, keep it for `delay_secs`, then wipe it if it is unchanged.
pub fn run_daemon(delay_secs: u64) -> Result<()> {
    let mut secret = String::new();
    std::io::stdin().read_to_string(&mut secret)?;

    // The parent stops reading after the status line; nothing else goes to stdout.
    let mut stdout = std::io::stdout();
    let written = Clipboard::new().and_then(|mut ctx| ctx.set_text(secret.as_str()).map(|_| ctx));
    let mut ctx = match written {
        Ok(ctx) => ctx,
        Err(e) => {
            writeln!(stdout, "{}{}", DAEMON_FAILED, e)?;
            return Ok(());
        }
    };
    writeln!(stdout, "{}", DAEMON_READY)?;
    stdout.flush()?;

    hold_text(&mut ctx, &secret, delay_secs)?;
    if delay_secs == 0 {
        return Ok(());
    }

    let current_content = ctx.get_text().unwrap_or_default();
    if should_clear(&current_content, &secret) {
        ctx.set_text("").map_err(|e| PassGenError::clipboard(e.to_string()))?;
        info!("clipboard cleared after {}s", delay_secs);
    } else {
        info!("clipboard changed since copy, leaving it alone");
    }
    Ok(())
}

/// Hand `secret` to a helper process that puts it on the clipboard and wipes
/// it after `clear_after_secs` (0 keeps it).
///
/// The clipboard is only written by the helper, so any error here leaves it
/// untouched.
pub fn copy_to_clipboard(secret: &str, clear_after_secs: u64) -> Result<()> {
    let exe_path = env::current_exe()?;
    let mut cmd = process::Command::new(exe_path);
    cmd.env(DAEMON_ENV, clear_after_secs.to_string())
       .stdin(process::Stdio::piped())
       .stdout(process::Stdio::piped())
       .stderr(process::Stdio::inherit());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        cmd.creation_flags(0x08000000); // CREATE_NO_WINDOW
    }

    let mut child = cmd.spawn()?;
    // Dropping stdin closes it so the helper's read finishes.
    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(secret.as_bytes()) {
            let _ = child.kill();
            return Err(e.into());
        }
    }

    let mut status = String::new();
    if let Some(stdout) = child.stdout.take() {
        BufReader::new(stdout).read_line(&mut status)?;
    }
    if let Err(e) = parse_daemon_status(&status) {
        warn!("clipboard helper did not take the password: {}", e);
        let _ = child.kill();
        return Err(e);
    }
    // Not waited on: the helper outlives this process until the wipe.
    debug!("clipboard helper running (pid {})", child.id());
    Ok(())
}
