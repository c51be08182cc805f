//! In-memory element tree over the XML flavours of `qstat`.

use domain_monitor::exception::{MonitorException, MonitorResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

#[derive(Debug, Default)]
pub(crate) struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    fn open(start: &BytesStart, response: &str) -> MonitorResult<Self> {
        let malformed = |e: String| MonitorException::response_parsing(e, response);
        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(|e| malformed(e.to_string()))?;
            let value = attribute
                .unescape_value()
                .map_err(|e| malformed(e.to_string()))?;
            attributes.push((
                String::from_utf8_lossy(attribute.key.as_ref()).into_owned(),
                value.into_owned(),
            ));
        }
        Ok(Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            attributes,
            ..Default::default()
        })
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Text of the first direct child named `name`.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.children
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.text.as_str())
    }

    /// Every element named `name` at or below this one, in document order.
    pub fn descendants<'a>(&'a self, name: &str) -> Vec<&'a XmlElement> {
        let mut found = Vec::new();
        self.collect(name, &mut found);
        found
    }

    fn collect<'a>(&'a self, name: &str, found: &mut Vec<&'a XmlElement>) {
        if self.name == name {
            found.push(self);
        }
        for child in &self.children {
            child.collect(name, found);
        }
    }
}

/// Reads `response` into its root element. Anything that is not a single
/// well-formed document is a parsing error.
pub(crate) fn parse_document(response: &str) -> MonitorResult<XmlElement> {
    let malformed = |reason: String| MonitorException::response_parsing(reason, response);
    let mut reader = Reader::from_str(response);
    reader.trim_text(true);

    let mut open: Vec<XmlElement> = Vec::new();
    let mut root = None;
    loop {
        let event = reader
            .read_event()
            .map_err(|e| malformed(format!("malformed xml: {e}")))?;
        match event {
            Event::Start(start) => open.push(XmlElement::open(&start, response)?),
            Event::Empty(start) => {
                let element = XmlElement::open(&start, response)?;
                match open.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| malformed(format!("malformed xml: {e}")))?;
                match open.last_mut() {
                    Some(element) => element.text.push_str(text.trim()),
                    None => return Err(malformed("text outside of the document element".into())),
                }
            }
            Event::CData(data) => {
                if let Some(element) = open.last_mut() {
                    element
                        .text
                        .push_str(String::from_utf8_lossy(&data.into_inner()).trim());
                }
            }
            Event::End(_) => {
                let Some(element) = open.pop() else {
                    return Err(malformed("unbalanced closing tag".into()));
                };
                match open.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !open.is_empty() {
        return Err(malformed("document ended inside an element".into()));
    }
    root.ok_or_else(|| malformed("no document element".into()))
}

/// One `<Job>` entry of `qstat -x` output, as written by Torque and PBS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QstatXmlJob {
    pub id: String,
    pub state: String,
    pub exit_status: Option<String>,
}

pub(crate) fn qstat_jobs(response: &str) -> MonitorResult<Vec<QstatXmlJob>> {
    let document = parse_document(response)?;
    Ok(document
        .descendants("Job")
        .into_iter()
        .filter_map(|job| {
            Some(QstatXmlJob {
                id: job.child_text("Job_Id")?.to_owned(),
                state: job.child_text("job_state").unwrap_or_default().to_owned(),
                exit_status: job
                    .child_text("exit_status")
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned),
            })
        })
        .collect())
}
