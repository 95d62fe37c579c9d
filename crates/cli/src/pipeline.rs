use dnstap_quiet_application::use_cases::ConvertFrameUseCase;
use dnstap_quiet_infrastructure::framestream::FrameStreamReader;
use std::io::{ErrorKind, Read, Write};
use tracing::{debug, warn};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    pub frames: u64,
    pub lines: u64,
    pub failures: u64,
}

/// Converts every data frame of a Frame Streams input and writes the lines to `output`.
///
/// Undecodable frames are logged and skipped; a malformed container aborts the run.
/// A closed output pipe ends the run early without an error.
pub fn convert_stream<R: Read, W: Write>(
    input: R,
    output: &mut W,
    use_case: &ConvertFrameUseCase,
) -> anyhow::Result<ConvertStats> {
    let mut stats = ConvertStats::default();

    for frame in FrameStreamReader::new(input) {
        let frame = frame?;
        stats.frames += 1;

        let line = match use_case.execute(&frame) {
            Ok(line) => line,
            Err(e) => {
                warn!(frame = stats.frames, error = %e, "Skipping undecodable frame");
                stats.failures += 1;
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        match output.write_all(&line) {
            Ok(()) => stats.lines += 1,
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("Output closed, stopping");
                return Ok(stats);
            }
            Err(e) => return Err(e.into()),
        }
    }

    match output.flush() {
        Err(e) if e.kind() != ErrorKind::BrokenPipe => Err(e.into()),
        _ => Ok(stats),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnstap_quiet_domain::Config;
    use std::io::Cursor;

    // A START control frame announcing dnstap content.
    fn start_frame() -> Vec<u8> {
        let content_type = b"protobuf:dnstap.Dnstap";
        let mut body = 2u32.to_be_bytes().to_vec();
        body.extend_from_slice(&1u32.to_be_bytes());
        body.extend_from_slice(&(content_type.len() as u32).to_be_bytes());
        body.extend_from_slice(content_type);

        let mut bytes = 0u32.to_be_bytes().to_vec();
        bytes.extend_from_slice(&(body.len() as u32).to_be_bytes());
        bytes.extend_from_slice(&body);
        bytes
    }

    fn data_frame(payload: &[u8]) -> Vec<u8> {
        let mut bytes = (payload.len() as u32).to_be_bytes().to_vec();
        bytes.extend_from_slice(payload);
        bytes
    }

    fn use_case() -> std::sync::Arc<ConvertFrameUseCase> {
        crate::di::UseCases::new(&Config::default())
            .unwrap()
            .convert_frame
    }

    // Dnstap { type: MESSAGE, message: { type: CLIENT_QUERY } }
    const MINIMAL_CLIENT_QUERY: &[u8] = &[0x72, 0x02, 0x08, 0x05, 0x78, 0x01];

    #[test]
    fn test_convert_stream_counts() {
        let mut input = start_frame();
        input.extend(data_frame(MINIMAL_CLIENT_QUERY));
        input.extend(data_frame(&[0x0a]));
        input.extend(data_frame(MINIMAL_CLIENT_QUERY));

        let mut output = Vec::new();
        let stats = convert_stream(Cursor::new(input), &mut output, &use_case()).unwrap();

        assert_eq!(
            stats,
            ConvertStats {
                frames: 3,
                lines: 2,
                failures: 1,
            }
        );
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "??:??:??.?????? CQ   0b X  X  X\n??:??:??.?????? CQ   0b X  X  X\n"
        );
    }

    #[test]
    fn test_convert_stream_rejects_malformed_container() {
        let mut output = Vec::new();
        let result = convert_stream(
            Cursor::new(data_frame(MINIMAL_CLIENT_QUERY)),
            &mut output,
            &use_case(),
        );

        assert!(result.is_err());
        assert!(output.is_empty());
    }
}
