use crate::{
    error::{
        Error,
        Result,
    },
    sysfs::Device,
};

/// Resolves a user supplied token to one device.
///
/// A token with a leading integer is tried as a 1-based index first, reading
/// it the way `strtol` does: leading whitespace, an optional sign, then the
/// digit run, ignoring whatever follows. `0` and tokens without leading
/// digits fall back to the first device whose basename contains the whole
/// token. Negative or too large indices are `OutOfRange`.
pub fn select<'a>(devices: &'a [Device], token: &str) -> Result<&'a Device> {
    let out_of_range = || Error::OutOfRange {
        index: token.to_string(),
        len: devices.len(),
    };

    if let Some(digits) = leading_integer(token) {
        match digits.parse::<i64>() {
            Ok(0) => {}
            Ok(index) if index < 0 => return Err(out_of_range()),
            Ok(index) => {
                let dev = usize::try_from(index - 1)
                    .ok()
                    .and_then(|i| devices.get(i))
                    .ok_or_else(out_of_range)?;
                log::debug!("selected device {} by index {}", dev.path.display(), index);
                return Ok(dev);
            }
            // only sign and digits are left, so this is overflow
            Err(_) => return Err(out_of_range()),
        }
    }

    let dev = devices
        .iter()
        .find(|dev| dev.basename().contains(token))
        .ok_or_else(|| Error::NotFound(token.to_string()))?;
    log::debug!("selected device {} by name '{}'", dev.path.display(), token);
    Ok(dev)
}

/// The optional sign and digit run at the start of `token`, after C
/// whitespace, or `None` when there are no leading digits.
fn leading_integer(token: &str) -> Option<&str> {
    let rest = token.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let unsigned = rest.strip_prefix(&['+', '-'][..]).unwrap_or(rest);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let end = rest.len() - unsigned.len() + digits;
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn devices() -> Vec<Device> {
        [
            "/sys/devices/pci0000:00/0000:00:02.0/drm/card0/card0-eDP-1/intel_backlight",
            "/sys/devices/platform/dell-laptop/leds/dell::kbd_backlight",
            "/sys/devices/platform/kbd_ctrl/input/input3/input3::capslock",
        ]
        .iter()
        .map(|p| Device::new(PathBuf::from(p)))
        .collect()
    }

    #[test]
    fn index_is_one_based() {
        let devs = devices();
        for n in 1..=devs.len() {
            assert_eq!(select(&devs, &n.to_string()).unwrap(), &devs[n - 1]);
        }
    }

    #[test]
    fn index_past_end() {
        let devs = devices();
        let err = select(&devs, "4").unwrap_err();
        assert!(matches!(err, Error::OutOfRange { len: 3, .. }));
    }

    #[test]
    fn negative_index() {
        let devs = devices();
        assert!(matches!(select(&devs, "-1").unwrap_err(), Error::OutOfRange { .. }));
    }

    #[test]
    fn overflowing_index() {
        let devs = devices();
        let err = select(&devs, "99999999999999999999999").unwrap_err();
        assert!(matches!(err, Error::OutOfRange { .. }));
    }

    #[test]
    fn trailing_text_after_index_is_ignored() {
        let mut devs = devices();
        devs.push(Device::new(PathBuf::from("/sys/devices/platform/leds/2x_led")));
        assert_eq!(select(&devs, "2x").unwrap(), &devs[1]);
    }

    #[test]
    fn leading_whitespace_before_index() {
        let devs = devices();
        assert_eq!(select(&devs, " 2").unwrap(), &devs[1]);
        assert_eq!(select(&devs, "\t+3").unwrap(), &devs[2]);
    }

    #[test]
    fn negative_with_trailing_text() {
        let devs = devices();
        assert!(matches!(select(&devs, "-2abc").unwrap_err(), Error::OutOfRange { .. }));
    }

    #[test]
    fn sign_without_digits_is_a_name() {
        let devs = devices();
        assert!(matches!(select(&devs, "-").unwrap_err(), Error::NotFound(_)));
    }

    #[test]
    fn leading_integer_digit_run() {
        assert_eq!(leading_integer("12ab"), Some("12"));
        assert_eq!(leading_integer("  -7"), Some("-7"));
        assert_eq!(leading_integer("+"), None);
        assert_eq!(leading_integer("kbd"), None);
        assert_eq!(leading_integer("a1"), None);
    }

    #[test]
    fn zero_falls_back_to_name() {
        let mut devs = devices();
        devs.push(Device::new(PathBuf::from("/sys/devices/virtual/backlight0")));
        assert_eq!(select(&devs, "0").unwrap(), &devs[3]);
    }

    #[test]
    fn name_matches_basename_only() {
        // the third device has "kbd" in its path but not in its basename
        let devs = devices();
        assert_eq!(select(&devs, "kbd").unwrap(), &devs[1]);
    }

    #[test]
    fn name_takes_first_match() {
        let devs = devices();
        assert_eq!(select(&devs, "backlight").unwrap(), &devs[0]);
    }

    #[test]
    fn name_not_found() {
        let devs = devices();
        assert!(matches!(select(&devs, "ctrl").unwrap_err(), Error::NotFound(_)));
    }

    #[test]
    fn empty_list() {
        assert!(matches!(select(&[], "1").unwrap_err(), Error::OutOfRange { len: 0, .. }));
        assert!(matches!(select(&[], "kbd").unwrap_err(), Error::NotFound(_)));
    }
}
