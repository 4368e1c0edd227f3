use crate::types::ActuatorCommand;
use anyhow::{anyhow, Result};

/// Wire format for the controller: five ASCII decimal integers in channel
/// order (pinky, ring, middle, index, thumb), comma separated, newline
/// terminated. The controller parses one command per line; there is no
/// framing beyond the newline and no acknowledgment.
pub fn encode(command: &ActuatorCommand) -> String {
    let c = &command.channels;
    format!("{},{},{},{},{}\n", c[0], c[1], c[2], c[3], c[4])
}

/// Parse a wire line back into channel values. The running system never
/// reads from the controller; this exists for loopback checks and tooling.
#[allow(dead_code)]
pub fn decode(line: &str) -> Result<[u8; 5]> {
    let trimmed = line
        .strip_suffix('\n')
        .ok_or_else(|| anyhow!("message missing newline terminator: {:?}", line))?;

    let mut channels = [0u8; 5];
    let mut count = 0;
    for (i, field) in trimmed.split(',').enumerate() {
        if i >= 5 {
            return Err(anyhow!("too many fields in message: {:?}", line));
        }
        channels[i] = field
            .parse()
            .map_err(|e| anyhow!("bad channel value {:?}: {}", field, e))?;
        count = i + 1;
    }
    if count != 5 {
        return Err(anyhow!("expected 5 fields, got {}: {:?}", count, line));
    }
    Ok(channels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Finger;

    #[test]
    fn test_encode_literal() {
        let mut command = ActuatorCommand::default();
        command.set(Finger::Ring, 70);
        command.set(Finger::Index, 70);
        assert_eq!(encode(&command), "0,70,0,70,0\n");
    }

    #[test]
    fn test_decode_recovers_channels() {
        assert_eq!(decode("0,70,0,70,0\n").unwrap(), [0, 70, 0, 70, 0]);
        assert_eq!(decode("70,70,70,70,70\n").unwrap(), [70; 5]);
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(decode("0,70,0,70,0").is_err()); // no terminator
        assert!(decode("0,70,0\n").is_err()); // short
        assert!(decode("0,70,0,70,0,0\n").is_err()); // long
        assert!(decode("0,seventy,0,70,0\n").is_err());
    }
}
