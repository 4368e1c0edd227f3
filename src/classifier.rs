use crate::types::{ActuatorCommand, Finger};

/// Bend angles above this are treated as an extended finger.
pub const EXTEND_THRESHOLD_DEG: f32 = 60.0;

/// Servo travel for the two discrete positions, in servo angle units.
const SERVO_LOW: u8 = 0;
const SERVO_HIGH: u8 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerState {
    Extended,
    Flexed,
}

/// Strictly greater-than: an angle of exactly 60.0 counts as Flexed.
pub fn finger_state(angle: f32, threshold: f32) -> FingerState {
    if angle > threshold {
        FingerState::Extended
    } else {
        FingerState::Flexed
    }
}

/// Per-finger polarity rule. The index channel runs inverted relative to the
/// other four: extending the index drives its servo high, while extending any
/// other finger drives its servo low. This matches the deployed controller
/// rig and is kept as a fixed rule.
pub fn servo_position(finger: Finger, state: FingerState) -> u8 {
    match (finger, state) {
        (Finger::Index, FingerState::Extended) => SERVO_HIGH,
        (Finger::Index, FingerState::Flexed) => SERVO_LOW,
        (_, FingerState::Extended) => SERVO_LOW,
        (_, FingerState::Flexed) => SERVO_HIGH,
    }
}

/// Turn the five bend angles (in `Finger::ALL` order) into a full actuator
/// command. Pure function of its inputs.
pub fn classify(angles: &[f32; 5], threshold: f32) -> ActuatorCommand {
    let mut command = ActuatorCommand::default();
    for (finger, &angle) in Finger::ALL.iter().zip(angles.iter()) {
        let state = finger_state(angle, threshold);
        command.set(*finger, servo_position(*finger, state));
    }
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(finger_state(60.0, EXTEND_THRESHOLD_DEG), FingerState::Flexed);
        assert_eq!(
            finger_state(60.0001, EXTEND_THRESHOLD_DEG),
            FingerState::Extended
        );
        assert_eq!(finger_state(0.0, EXTEND_THRESHOLD_DEG), FingerState::Flexed);
        assert_eq!(
            finger_state(180.0, EXTEND_THRESHOLD_DEG),
            FingerState::Extended
        );
    }

    #[test]
    fn test_index_polarity_is_inverted() {
        // Extended index opens its servo...
        assert_eq!(servo_position(Finger::Index, FingerState::Extended), 70);
        assert_eq!(servo_position(Finger::Index, FingerState::Flexed), 0);
        // ...while every other finger works the opposite way
        for finger in [Finger::Thumb, Finger::Middle, Finger::Ring, Finger::Pinky] {
            assert_eq!(servo_position(finger, FingerState::Extended), 0);
            assert_eq!(servo_position(finger, FingerState::Flexed), 70);
        }
    }

    #[test]
    fn test_classify_by_angle() {
        // index at 80 deg -> extended -> 70; middle at 80 deg -> extended -> 0
        let command = classify(&[80.0, 80.0, 80.0, 80.0, 80.0], EXTEND_THRESHOLD_DEG);
        assert_eq!(command.get(Finger::Index), 70);
        assert_eq!(command.get(Finger::Middle), 0);

        // index at 10 deg -> flexed -> 0; middle at 10 deg -> flexed -> 70
        let command = classify(&[10.0, 10.0, 10.0, 10.0, 10.0], EXTEND_THRESHOLD_DEG);
        assert_eq!(command.get(Finger::Index), 0);
        assert_eq!(command.get(Finger::Middle), 70);
    }

    #[test]
    fn test_classify_channel_order() {
        // Only the thumb extended: thumb servo low, all others high
        let command = classify(&[120.0, 10.0, 10.0, 10.0, 10.0], EXTEND_THRESHOLD_DEG);
        // channels: pinky, ring, middle, index, thumb
        assert_eq!(command.channels, [70, 70, 70, 0, 0]);
    }
}
