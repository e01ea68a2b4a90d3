//! Exit handling: signal handlers and terminal restoration.

/// Put the controlling terminal back into cooked mode.
#[cfg(unix)]
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit - runs on every normal exit.
#[cfg(unix)]
extern "C" fn cleanup_on_exit() {
    restore_termios();
    const SEQ: &[u8] = b"\x1b[0m\x1b[?25h";
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, SEQ.as_ptr() as *const libc::c_void, SEQ.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP - exit, atexit does the cleanup.
#[cfg(unix)]
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and the atexit cleanup. Call early in main().
#[cfg(unix)]
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

#[cfg(not(unix))]
pub fn install_handlers() {}

/// Keep passwords out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

/// Ctrl+C pressed while the terminal was in raw mode.
pub fn interrupted() -> ! {
    crate::terminal::reset_terminal();
    println!();
    std::process::exit(130)
}
