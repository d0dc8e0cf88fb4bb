use std::fmt::Write;

use crate::{
    error::Result,
    sysfs::{
        Device,
        BRIGHTNESS,
        MAX_BRIGHTNESS,
    },
};

/// Current and max brightness, kept as the kernel printed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrightnessReading {
    pub current: String,
    pub max: String,
}

impl BrightnessReading {
    pub fn read(device: &Device) -> Result<BrightnessReading> {
        Ok(Self {
            current: device.read_attribute(BRIGHTNESS)?,
            max: device.read_attribute(MAX_BRIGHTNESS)?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter {
    pub verbose: bool,
}

impl Presenter {
    #[inline]
    pub fn new(verbose: bool) -> Presenter {
        Self { verbose }
    }

    /// One line per device: `index name current max`, name and current padded
    /// so the columns line up.
    ///
    /// Every reading is taken before anything is rendered; one unreadable
    /// device fails the whole table.
    pub fn listing(&self, devices: &[Device]) -> Result<String> {
        let readings = devices
            .iter()
            .map(BrightnessReading::read)
            .collect::<Result<Vec<_>>>()?;

        Ok(self.render_listing(devices, &readings))
    }

    pub fn render_listing(&self, devices: &[Device], readings: &[BrightnessReading]) -> String {
        let names: Vec<_> = devices.iter().map(|d| d.display_name(self.verbose)).collect();
        let name_width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);
        let current_width = readings
            .iter()
            .map(|r| r.current.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for (i, (name, reading)) in names.iter().zip(readings).enumerate() {
            // writing into a String can't fail
            let _ = writeln!(
                out,
                "{:>3} {:<name_width$} {:<current_width$} {}",
                i + 1,
                name,
                reading.current,
                reading.max,
            );
        }
        out
    }

    /// `name: value` after a write, `value` being the re-read brightness.
    pub fn confirmation(&self, device: &Device, current: &str) -> String {
        format!("{}: {}\n", device.display_name(self.verbose), current)
    }
}
