//! Console shim for the `git-relevant-history` command.

use anyhow::Result;
use gitrelevanthistory::PackageDescriptor;
use gitrelevanthistory::descriptor::resolve;

fn main() -> Result<()> {
    let descriptor = PackageDescriptor::current();
    let entry_point = descriptor.console_script("git-relevant-history")?;
    let callable = resolve(entry_point)?;
    callable()
}
