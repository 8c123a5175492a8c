use crate::backend::{JoystickSlot, JoystickState, Platform};
use crate::names::UNKNOWN;
use crate::report::Report;

/// Report every joystick slot.
///
/// Every slot yields exactly one line, whether a device is plugged in or not.
pub fn joysticks<P>(report: &mut Report, platform: &mut P)
where
  P: ?Sized + Platform,
{
  report.append_separator();

  for slot in platform.joysticks() {
    report.append_line(slot_line(&slot));
  }
}

fn slot_line(slot: &JoystickSlot) -> String {
  match slot.state {
    JoystickState::Present {
      ref name,
      axes,
      buttons,
    } => format!(
      "Joystick {} ({}): {} axes, {} buttons",
      slot.index,
      name.as_deref().unwrap_or(UNKNOWN),
      axes,
      buttons
    ),

    JoystickState::Absent => format!("Joystick {}: not present", slot.index),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::backend::MonitorInfo;
  use crate::report::LineEnding;

  struct Slots(Vec<JoystickSlot>);

  impl Platform for Slots {
    fn version_string(&self) -> String {
      String::new()
    }

    fn monitors(&mut self) -> Vec<MonitorInfo> {
      Vec::new()
    }

    fn joysticks(&mut self) -> Vec<JoystickSlot> {
      self.0.clone()
    }
  }

  #[test]
  fn every_slot_gets_one_line() {
    let slots = (0..16)
      .map(|index| JoystickSlot {
        index,
        state: JoystickState::Absent,
      })
      .collect();
    let mut report = Report::with_line_ending(LineEnding::Lf);
    joysticks(&mut report, &mut Slots(slots));

    let lines: Vec<_> = report.text().lines().collect();
    assert_eq!(lines.len(), 17);
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "Joystick 0: not present");
    assert_eq!(lines[16], "Joystick 15: not present");
  }

  #[test]
  fn present_slot() {
    let slots = vec![
      JoystickSlot {
        index: 0,
        state: JoystickState::Present {
          name: Some("Xbox Controller".to_owned()),
          axes: 6,
          buttons: 15,
        },
      },
      JoystickSlot {
        index: 1,
        state: JoystickState::Present {
          name: None,
          axes: 2,
          buttons: 4,
        },
      },
      JoystickSlot {
        index: 2,
        state: JoystickState::Absent,
      },
    ];
    let mut report = Report::with_line_ending(LineEnding::Lf);
    joysticks(&mut report, &mut Slots(slots));

    assert_eq!(
      report.text(),
      "\nJoystick 0 (Xbox Controller): 6 axes, 15 buttons\n\
       Joystick 1 (unknown): 2 axes, 4 buttons\n\
       Joystick 2: not present\n"
    );
  }
}
