use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RsvpChoice {
	#[default]
	Attending,
	NotAttending,
	Undecided
}

impl RsvpChoice {
	/// In the order they're offered in the dropdown
	pub const ALL: [Self; 3] = [Self::Attending, Self::NotAttending, Self::Undecided];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Attending => "Hadir",
			Self::NotAttending => "Tidak Hadir",
			Self::Undecided => "Masih Pertimbangan"
		}
	}
}

impl fmt::Display for RsvpChoice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

#[derive(PartialEq, Eq, Debug)]
pub struct UnknownChoice(pub String);

impl fmt::Display for UnknownChoice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "'{}' isn't one of the attendance options", self.0)
	}
}

impl FromStr for RsvpChoice {
	type Err = UnknownChoice;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|choice| choice.label() == s)
			.ok_or_else(|| UnknownChoice(s.to_string()))
	}
}

/// Whatever the visitor has typed into the form so far. Nothing ever sends this anywhere; it only
/// exists so there's a ready-made payload once there's somewhere to send it.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct RsvpDraft {
	pub name: String,
	pub choice: RsvpChoice
}

impl RsvpDraft {
	/// The name input is `required`, so whitespace alone doesn't count
	#[must_use]
	pub fn is_complete(&self) -> bool {
		!self.name.trim().is_empty()
	}

	/// One line describing the draft as it stands, or `None` if there's no name yet
	#[must_use]
	pub fn preview(&self) -> Option<String> {
		self.is_complete()
			.then(|| format!("{} ({})", self.name.trim(), self.choice))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn labels_parse_back() {
		for choice in RsvpChoice::ALL {
			assert_eq!(choice.label().parse::<RsvpChoice>(), Ok(choice));
			assert_eq!(choice.to_string(), choice.label());
		}
	}

	#[test]
	fn unknown_label_is_rejected() {
		assert_eq!(
			"Maybe".parse::<RsvpChoice>(),
			Err(UnknownChoice("Maybe".into()))
		);
		assert!("hadir".parse::<RsvpChoice>().is_err());
	}

	#[test]
	fn drafts_start_attending_and_incomplete() {
		let draft = RsvpDraft::default();
		assert_eq!(draft.choice, RsvpChoice::Attending);
		assert!(!draft.is_complete());

		let blank = RsvpDraft { name: "   ".into(), ..RsvpDraft::default() };
		assert!(!blank.is_complete());

		let named = RsvpDraft { name: "Dewi".into(), choice: RsvpChoice::Undecided };
		assert!(named.is_complete());
	}

	#[test]
	fn preview_follows_every_edit() {
		let mut draft = RsvpDraft::default();
		assert_eq!(draft.preview(), None);

		// typed one character at a time, the way input events arrive
		for typed in ["D", "De", "Dew", "Dewi "] {
			draft.name = typed.into();
			assert_eq!(draft.preview(), Some(format!("{} (Hadir)", typed.trim())));
		}

		draft.choice = RsvpChoice::Undecided;
		assert_eq!(draft.preview().as_deref(), Some("Dewi (Masih Pertimbangan)"));
	}

	#[test]
	fn draft_serializes_for_a_future_backend() {
		let draft = RsvpDraft { name: "Dewi".into(), choice: RsvpChoice::NotAttending };
		let json = serde_json::to_string(&draft).expect("serializable");
		assert_eq!(json, r#"{"name":"Dewi","choice":"NotAttending"}"#);
	}
}
