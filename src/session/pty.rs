//! Local PTY transport
//!
//! A `SessionChannel` backed by a Unix pseudo-terminal running a local
//! process. This is the crate's reference transport: it exercises the full
//! ingest → parse → snapshot path against a real shell without involving a
//! network. An SSH transport plugs into the same trait from outside.

use std::ffi::CString;
use std::os::fd::BorrowedFd;
use std::os::unix::io::{AsRawFd, RawFd};
use std::sync::atomic::{AtomicBool, Ordering};

use nix::fcntl::{open, OFlag};
use nix::libc::{self, STDERR_FILENO, STDIN_FILENO, STDOUT_FILENO};
use nix::poll::{poll, PollFd, PollFlags};
use nix::pty::{grantpt, posix_openpt, ptsname, unlockpt, PtyMaster};
use nix::sys::stat::Mode;
use nix::sys::wait::{waitpid, WaitPidFlag};
use nix::unistd::{close, dup2, execvp, fork, read, setsid, write, ForkResult, Pid};
use tracing::debug;

use super::channel::{SessionChannel, TransportError, TransportResult};

/// How long each poll waits before re-checking the closed flag.
const POLL_INTERVAL_MS: i32 = 100;

fn errno_to_transport(err: nix::errno::Errno) -> TransportError {
    TransportError::Io(std::io::Error::from_raw_os_error(err as i32))
}

/// A pseudo-terminal channel with a spawned child process.
pub struct PtyChannel {
    master: PtyMaster,
    child: Pid,
    closed: AtomicBool,
}

impl PtyChannel {
    /// Spawn `command` with `args` on a fresh PTY of the given size.
    pub fn spawn(command: &str, args: &[&str], cols: u16, rows: u16) -> TransportResult<Self> {
        let master =
            posix_openpt(OFlag::O_RDWR | OFlag::O_NOCTTY).map_err(errno_to_transport)?;
        grantpt(&master).map_err(errno_to_transport)?;
        unlockpt(&master).map_err(errno_to_transport)?;

        // SAFETY: ptsname is not thread-safe in general; we call it right
        // after unlockpt, before the fd is shared anywhere.
        let slave_name = unsafe { ptsname(&master) }.map_err(errno_to_transport)?;

        set_window_size(master.as_raw_fd(), cols, rows)?;

        // SAFETY: the child only calls async-signal-safe functions before
        // exec.
        match unsafe { fork() }.map_err(errno_to_transport)? {
            ForkResult::Child => {
                drop(master);

                if setsid().is_err() {
                    std::process::exit(1);
                }

                let slave_fd = match open(slave_name.as_str(), OFlag::O_RDWR, Mode::empty()) {
                    Ok(fd) => fd,
                    Err(_) => std::process::exit(1),
                };

                // SAFETY: TIOCSCTTY on the freshly opened slave makes it the
                // controlling terminal; failure is tolerable on some systems.
                unsafe {
                    libc::ioctl(slave_fd, libc::TIOCSCTTY as _, 0);
                }

                if dup2(slave_fd, STDIN_FILENO).is_err()
                    || dup2(slave_fd, STDOUT_FILENO).is_err()
                    || dup2(slave_fd, STDERR_FILENO).is_err()
                {
                    std::process::exit(1);
                }
                if slave_fd > STDERR_FILENO {
                    let _ = close(slave_fd);
                }

                std::env::set_var("TERM", "xterm-256color");

                let Ok(command_cstr) = CString::new(command) else {
                    std::process::exit(1);
                };
                let mut argv: Vec<CString> = Vec::with_capacity(args.len() + 1);
                argv.push(command_cstr.clone());
                for arg in args {
                    match CString::new(*arg) {
                        Ok(cstr) => argv.push(cstr),
                        Err(_) => std::process::exit(1),
                    }
                }

                let _ = execvp(&command_cstr, &argv);
                // execvp only returns on error.
                std::process::exit(1);
            }
            ForkResult::Parent { child } => Ok(Self {
                master,
                child,
                closed: AtomicBool::new(false),
            }),
        }
    }

    /// Spawn the user's default shell.
    pub fn spawn_shell(cols: u16, rows: u16) -> TransportResult<Self> {
        let shell = std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string());
        Self::spawn(&shell, &[], cols, rows)
    }

    pub fn child_pid(&self) -> Pid {
        self.child
    }
}

impl SessionChannel for PtyChannel {
    fn read_chunk(&self, buf: &mut [u8]) -> TransportResult<usize> {
        loop {
            if self.closed.load(Ordering::SeqCst) {
                return Err(TransportError::ChannelClosed);
            }

            // SAFETY: the master fd is valid for the lifetime of self.
            let borrowed = unsafe { BorrowedFd::borrow_raw(self.master.as_raw_fd()) };
            let mut fds = [PollFd::new(&borrowed, PollFlags::POLLIN)];
            let ready = poll(&mut fds, POLL_INTERVAL_MS).map_err(errno_to_transport)?;
            if ready == 0 {
                continue;
            }

            match read(self.master.as_raw_fd(), buf) {
                Ok(0) => return Ok(0),
                Ok(n) => return Ok(n),
                Err(nix::errno::Errno::EAGAIN) => continue,
                // The kernel reports EIO on the master once the child exits.
                Err(nix::errno::Errno::EIO) => return Ok(0),
                Err(err) => return Err(errno_to_transport(err)),
            }
        }
    }

    fn write_all(&self, mut data: &[u8]) -> TransportResult<()> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(TransportError::ChannelClosed);
        }
        while !data.is_empty() {
            let n = write(self.master.as_raw_fd(), data).map_err(errno_to_transport)?;
            data = &data[n..];
        }
        Ok(())
    }

    fn resize(&self, cols: u16, rows: u16) -> TransportResult<()> {
        set_window_size(self.master.as_raw_fd(), cols, rows)
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        debug!(child = %self.child, "pty channel closed");
    }
}

impl Drop for PtyChannel {
    fn drop(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
        // Reap the child if it already exited; do not block otherwise.
        let _ = waitpid(self.child, Some(WaitPidFlag::WNOHANG));
    }
}

fn set_window_size(fd: RawFd, cols: u16, rows: u16) -> TransportResult<()> {
    let winsize = libc::winsize {
        ws_row: rows,
        ws_col: cols,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };

    // SAFETY: TIOCSWINSZ with a valid winsize on a PTY master fd.
    let result = unsafe { libc::ioctl(fd, libc::TIOCSWINSZ, &winsize) };
    if result < 0 {
        Err(errno_to_transport(nix::errno::Errno::last()))
    } else {
        Ok(())
    }
}
