pub mod cli;
pub mod error;
pub mod logging;
pub mod present;
pub mod privilege;
pub mod select;
pub mod sysfs;

pub use cli::{
    Args,
    Mode,
    Options,
};
pub use error::{
    Error,
    PrivilegeError,
    Result,
};
pub use present::{
    BrightnessReading,
    Presenter,
};
pub use privilege::{
    set_brightness,
    Credentials,
    PrivilegeGuard,
    Process,
};
pub use select::select;
pub use sysfs::{
    scan,
    Device,
};

/// Lists every device under `options.root`.
pub fn list(options: &Options) -> Result<String> {
    let devices = found(&options.root)?;
    Presenter::new(options.verbose).listing(&devices)
}

/// Writes `value` to the device `selector` resolves to and returns the
/// confirmation line with the brightness read back afterwards.
pub fn change<C: Credentials>(creds: &C, options: &Options, selector: &str, value: &str) -> Result<String> {
    let devices = found(&options.root)?;
    let device = select(&devices, selector)?;

    set_brightness(creds, device, value)?;

    let current = device.read_attribute(sysfs::BRIGHTNESS)?;
    Ok(Presenter::new(options.verbose).confirmation(device, &current))
}

fn found(root: &std::path::Path) -> Result<Vec<Device>> {
    let devices = scan(root)?;
    if devices.is_empty() {
        return Err(Error::NoDevices);
    }
    Ok(devices)
}
