use anyhow::Result;
use colored::Colorize;

use lenswork_core::GalleryCore;

pub fn run(core: &GalleryCore, key: Option<String>) -> Result<()> {
    if core.store.is_admin() {
        println!("Owner session already open.");
        return Ok(());
    }

    let attempt = match key {
        Some(key) => key,
        None => rpassword::prompt_password("Owner key: ")?,
    };

    core.store.login(&attempt)?;
    println!("{}", "Management mode active. Welcome back, Mohamed.".green());

    Ok(())
}
