/**
 * ngo - strip Angular decorator metadata
 *
 * Reads one compiled JavaScript file and writes it to stdout with the
 * `Foo.decorators = [...]` metadata blanked out.
 */
use std::process;

fn main() {
    process::exit(angular_metadata_strip::main_entry::main_fn(std::env::args_os()));
}
