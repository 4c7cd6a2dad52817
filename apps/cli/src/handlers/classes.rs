use crate::models::args::ProfileArgs;
use crate::models::profile::Profile;
use anyhow::Result;

/// Prints the class string for the resolved profile.
pub fn print_classes(args: &ProfileArgs) -> Result<()> {
    let profile = Profile::resolve(args)?;
    println!("{}", pclass::get_platform_classes(&profile.platform, &profile.classes));
    Ok(())
}
