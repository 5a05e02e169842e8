use {crate::error::ReportError, serde_json::Value};

/// The parts of the first stream of a probe report that get printed
#[derive(Debug, PartialEq)]
pub struct StreamSummary {
    pub codec_name: String,
    pub sample_rate: String,
    pub channels: u64,
    pub bit_rate: String,
    pub duration: String,
}

impl StreamSummary {
    /// Parses a probe report and reads the first stream, other streams are ignored
    pub fn from_report(report: &str) -> Result<Self, ReportError> {
        let report: Value = serde_json::from_str(report)?;

        let streams = report
            .get("streams")
            .and_then(Value::as_array)
            .ok_or(ReportError::MissingStreams)?;

        let stream = streams.first().ok_or(ReportError::NoStream)?;

        Ok(Self {
            duration: string_field(stream, "duration")?,
            sample_rate: string_field(stream, "sample_rate")?,
            channels: count_field(stream, "channels")?,
            codec_name: string_field(stream, "codec_name")?,
            bit_rate: string_field(stream, "bit_rate")?,
        })
    }
}

impl std::fmt::Display for StreamSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Audio file has encoding {}, sample rate {}, {} channel(s), {} bit rate, and is {} seconds long",
            self.codec_name, self.sample_rate, self.channels, self.bit_rate, self.duration
        )
    }
}

fn field<'a>(stream: &'a Value, name: &'static str) -> Result<&'a Value, ReportError> {
    stream
        .get(name)
        .ok_or(ReportError::MissingField { field: name })
}

fn string_field(stream: &Value, name: &'static str) -> Result<String, ReportError> {
    let value = field(stream, name)?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ReportError::WrongType {
            field: name,
            expected: "a string",
            actual: value.clone(),
        })
}

fn count_field(stream: &Value, name: &'static str) -> Result<u64, ReportError> {
    let value = field(stream, name)?;
    value.as_u64().ok_or_else(|| ReportError::WrongType {
        field: name,
        expected: "a non-negative integer",
        actual: value.clone(),
    })
}


#[cfg(test)]
mod tests {
    use {
        super::{samples::MP3_REPORT, StreamSummary},
        crate::error::ReportError,
        serde_json::json,
    };

    #[test]
    fn reads_the_first_stream() {
        let summary = StreamSummary::from_report(MP3_REPORT).unwrap();

        assert_eq!(
            summary,
            StreamSummary {
                codec_name: "mp3".to_string(),
                sample_rate: "44100".to_string(),
                channels: 2,
                bit_rate: "320000".to_string(),
                duration: "213.289796".to_string(),
            }
        );
        assert_eq!(
            summary.to_string(),
            "Audio file has encoding mp3, sample rate 44100, 2 channel(s), 320000 bit rate, and is 213.289796 seconds long"
        );
    }

    #[test]
    fn ignores_later_streams() {
        let report = json!({
            "streams": [
                {"codec_name": "aac", "sample_rate": "48000", "channels": 6, "bit_rate": "384000", "duration": "10.0"},
                {"codec_name": "h264", "width": 1920}
            ]
        });

        let summary = StreamSummary::from_report(&report.to_string()).unwrap();

        assert_eq!(summary.codec_name, "aac");
        assert_eq!(summary.channels, 6);
    }

    #[test]
    fn invalid_json() {
        let res = StreamSummary::from_report("ffprobe crashed");

        assert!(matches!(res, Err(ReportError::Json(_))), "{res:?}");
    }

    #[test]
    fn missing_or_empty_streams() {
        let res = StreamSummary::from_report(r#"{"format": {}}"#);
        assert!(matches!(res, Err(ReportError::MissingStreams)), "{res:?}");

        let res = StreamSummary::from_report(r#"{"streams": {}}"#);
        assert!(matches!(res, Err(ReportError::MissingStreams)), "{res:?}");

        let res = StreamSummary::from_report(r#"{"streams": []}"#);
        assert!(matches!(res, Err(ReportError::NoStream)), "{res:?}");
    }

    #[test]
    fn missing_field() {
        // Opus in webm has no per stream bit rate
        let report = json!({
            "streams": [{"codec_name": "opus", "sample_rate": "48000", "channels": 2, "duration": "3.5"}]
        });

        let err = StreamSummary::from_report(&report.to_string()).unwrap_err();

        assert!(
            matches!(err, ReportError::MissingField { field: "bit_rate" }),
            "{err:?}"
        );
        assert_eq!(err.to_string(), "the first stream has no `bit_rate` field");
    }

    #[test]
    fn wrong_field_type() {
        let report = json!({
            "streams": [{"codec_name": "mp3", "sample_rate": 44100, "channels": 2, "bit_rate": "1", "duration": "1"}]
        });

        let err = StreamSummary::from_report(&report.to_string()).unwrap_err();

        assert!(
            matches!(err, ReportError::WrongType { field: "sample_rate", .. }),
            "{err:?}"
        );

        let report = json!({
            "streams": [{"codec_name": "mp3", "sample_rate": "44100", "channels": "2", "bit_rate": "1", "duration": "1"}]
        });

        let err = StreamSummary::from_report(&report.to_string()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "the first stream's `channels` field should be a non-negative integer, got: \"2\""
        );
    }
}
