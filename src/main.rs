use clap::App;

use std::borrow::Cow;
use std::path::Path;
use std::process;

use lsevdev::device::{self, ALIAS_DIRS, DEVICE_DIR};
use lsevdev::find_links_to;

/// Last path component, for display.
fn basename(path: &Path) -> Cow<str> {
    path.file_name()
        .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
}

/// Print one indented line per alias of `target` found in `dir`, or a
/// single diagnostic line when that directory cannot be searched.
fn print_links(target: &Path, dir: &Path) {
    let dir_base = basename(dir);
    match find_links_to(target, dir) {
        Ok(links) => {
            for link in links {
                println!("    {}: {}", dir_base, basename(&link));
            }
        }
        Err(err) => println!("    {}: unable to acquire links: {}", dir_base, err),
    }
}

fn main() {
    env_logger::init();

    App::new("lsevdev")
        .version("0.1.0")
        .version_short("v")
        .about("List all input devices from /dev/input/event* with their names and aliases.")
        .get_matches();

    let devices = match device::enumerate(Path::new(DEVICE_DIR)) {
        Ok(devices) => devices,
        Err(err) => {
            eprintln!("Unable to open {} directory: {}", DEVICE_DIR, err);
            process::exit(1);
        }
    };

    for dev in devices {
        println!("{}: {}", basename(&dev.path), dev.name);
        for dir in ALIAS_DIRS {
            print_links(&dev.path, Path::new(dir));
        }
    }
}
