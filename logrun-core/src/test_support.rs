//-----------------------------------------------------------------------------
// Test helpers
//-----------------------------------------------------------------------------
use crate::classify::{Classification, Classifier, GrammarTier};
use crate::record::LogRecord;

/// Builds combined-log-format lines for tests.
pub struct AccessLine {
    address: String,
    date: String,
    time: String,
    offset: Option<String>,
    method: String,
    endpoint: String,
    suffix: Option<Suffix>,
}

struct Suffix {
    status: String,
    size: String,
    referrer: String,
    user_agent: String,
}

impl AccessLine {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            date: "08/Apr/2018".to_string(),
            time: "07:54:55".to_string(),
            offset: Some("+0000".to_string()),
            method: "GET".to_string(),
            endpoint: "/".to_string(),
            suffix: Some(Suffix {
                status: "200".to_string(),
                size: "100".to_string(),
                referrer: "-".to_string(),
                user_agent: "curl/7.29.0".to_string(),
            }),
        }
    }

    pub fn at(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn on(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn offset(mut self, offset: Option<&str>) -> Self {
        self.offset = offset.map(str::to_string);
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        if let Some(suffix) = self.suffix.as_mut() {
            suffix.status = status.into();
        }
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        if let Some(suffix) = self.suffix.as_mut() {
            suffix.user_agent = user_agent.into();
        }
        self
    }

    pub fn without_suffix(mut self) -> Self {
        self.suffix = None;
        self
    }

    pub fn build(&self) -> String {
        let bracket = match &self.offset {
            Some(offset) => format!("[{}:{} {}]", self.date, self.time, offset),
            None => format!("[{}:{}]", self.date, self.time),
        };

        let mut line = format!(
            "{} - - {} \"{} {} HTTP/1.1\"",
            self.address, bracket, self.method, self.endpoint
        );

        if let Some(s) = &self.suffix {
            line.push_str(&format!(
                " {} {} \"{}\" \"{}\"",
                s.status, s.size, s.referrer, s.user_agent
            ));
        }

        line
    }

    pub fn record(&self, tier: GrammarTier) -> LogRecord {
        let line = self.build();
        match Classifier::new(tier).classify(&line) {
            Classification::Matched(record) => record,
            Classification::Unmatched(line) => panic!("fixture line did not match: {line}"),
        }
    }
}
