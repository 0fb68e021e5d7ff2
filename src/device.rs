//! Enumeration of evdev character devices.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::os::fd::AsRawFd;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use nix::ioctl_read_buf;

ioctl_read_buf!(eviocgname, b'E', 0x06, u8);

/// Directory holding the kernel's input device nodes.
pub const DEVICE_DIR: &str = "/dev/input";

/// Alias directories the kernel populates with stable symlinks, in the
/// order they are reported.
pub const ALIAS_DIRS: &[&str] = &["/dev/input/by-path", "/dev/input/by-id"];

const DEVICE_PREFIX: &str = "event";

/// An input device node together with its kernel-reported name.
pub struct InputDevice {
    pub path: PathBuf,
    pub name: String,
}

/// True for entry names that denote event devices (`event0`, `event12`, ...).
fn is_event_node(name: &str) -> bool {
    name.starts_with(DEVICE_PREFIX)
}

/// List the event devices under `devdir`.
///
/// Entries without the event prefix, and devices that cannot be opened,
/// are skipped; a device whose name query fails is reported as "unknown".
/// Only a failure to read `devdir` itself is an error.
pub fn enumerate(devdir: &Path) -> io::Result<Vec<InputDevice>> {
    let mut devices = Vec::new();
    for entry in fs::read_dir(devdir)? {
        let entry = entry?;
        let path = entry.path();
        if !path
            .file_name()
            .and_then(|name| name.to_str())
            .map(is_event_node)
            .unwrap_or(false)
        {
            continue;
        }

        let file = match open_device(&path) {
            Ok(file) => file,
            Err(err) => {
                log::debug!("skipping {}: {}", path.display(), err);
                continue;
            }
        };

        let name = read_device_name(&file).unwrap_or_else(|| "unknown".to_string());
        devices.push(InputDevice { path, name });
    }
    Ok(devices)
}

fn open_device(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .read(true)
        .custom_flags(libc::O_NONBLOCK | libc::O_CLOEXEC)
        .open(path)
}

/// Ask the kernel for the device's display name (`EVIOCGNAME`).
///
/// `None` when the ioctl fails or reports a non-positive length.
fn read_device_name(file: &File) -> Option<String> {
    let mut buf = [0u8; 256];
    let len = unsafe { eviocgname(file.as_raw_fd(), &mut buf) }.ok()?;
    if len <= 0 {
        return None;
    }
    let end = buf.iter().position(|b| *b == 0).unwrap_or(buf.len());
    Some(String::from_utf8_lossy(&buf[..end]).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::is_event_node;

    #[test]
    fn event_prefix_filter() {
        assert!(is_event_node("event0"));
        assert!(is_event_node("event12"));
        assert!(!is_event_node("mouse0"));
        assert!(!is_event_node("by-id"));
        assert!(!is_event_node("ev"));
    }
}
