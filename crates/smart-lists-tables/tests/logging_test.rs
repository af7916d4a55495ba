
use fixtures::*;
use rstest::*;
use smart_lists_tables::{FilterOption, InMemorySource, ListView, ReferencedRecord, StaticMetadata};
use smart_lists_urls::QueryParams;
use std::sync::{Arc, Mutex};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// A tracing layer that captures log messages to a Vec<String>
struct LogCapture {
	logs: Arc<Mutex<Vec<String>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
		struct MessageVisitor {
			message: String,
		}

		impl tracing::field::Visit for MessageVisitor {
			fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
				if field.name() == "message" {
					self.message.insert_str(0, &format!("{:?}", value));
				} else {
					self.message.push_str(&format!(" {}={:?}", field.name(), value));
				}
			}
		}

		let mut visitor = MessageVisitor {
			message: String::new(),
		};
		event.record(&mut visitor);

		self.logs
			.lock()
			.unwrap()
			.push(format!("[{}] {}", event.metadata().level(), visitor.message));
	}
}

#[rstest]
fn test_fallbacks_are_logged_at_debug(
	ticket_source: InMemorySource<Ticket>,
	ticket_metadata: StaticMetadata,
) {
	// Arrange
	let logs = Arc::new(Mutex::new(Vec::new()));
	let capture = LogCapture { logs: logs.clone() };
	let _guard = tracing_subscriber::registry().with(capture).set_default();

	// Act
	let list = ListView::builder(&ticket_source, &ticket_metadata)
		.query_params(QueryParams::parse("o=5.1"))
		.list_display(["title", "assignee_email"])
		.build()
		.unwrap();
	let ordering = list.ordering();
	let rendered: Vec<_> = list
		.items()
		.flat_map(|item| item.fields().map(|cell| cell.render()).collect::<Vec<_>>())
		.collect();

	// Assert
	assert_eq!(list.columns()[1].title(), "Assignee Email");
	assert_eq!(ordering.len(), 1);
	assert_eq!(rendered.len(), 8);

	let captured = logs.lock().unwrap();
	let has = |needle: &str| captured.iter().any(|line| line.starts_with("[DEBUG]") && line.contains(needle));
	assert!(has("deriving title from name"));
	assert!(has("sort key has no sortable column"));
	assert!(has("record has no value for column"));
	assert!(has("built list view"));
}

#[rstest]
fn test_unresolved_references_are_logged(sample_tickets: Vec<Ticket>, ticket_metadata: StaticMetadata) {
	// Arrange
	let logs = Arc::new(Mutex::new(Vec::new()));
	let capture = LogCapture { logs: logs.clone() };
	let _guard = tracing_subscriber::registry().with(capture).set_default();
	let source = InMemorySource::new(sample_tickets).with_resolver(|_, keys| {
		keys.iter()
			.filter(|key| key.as_str() == "10")
			.map(|key| ReferencedRecord::new(key.clone(), "alice"))
			.collect()
	});

	// Act
	let list = ListView::builder(&source, &ticket_metadata)
		.list_filter(["owner"])
		.build()
		.unwrap();

	// Assert
	let labels: Vec<_> = list.filters()[0].options().iter().map(FilterOption::label).collect();
	assert_eq!(labels, vec!["All", "alice"]);

	let captured = logs.lock().unwrap();
	let line = captured
		.iter()
		.find(|line| line.contains("some referenced records were not found"))
		.expect("missing reference log");
	assert!(line.starts_with("[DEBUG]"));
	assert!(line.contains("field=owner"));
	assert!(line.contains("target=user"));
	assert!(line.contains("keys=2"));
	assert!(line.contains("resolved=1"));
}
