// Everything printed on the page. None of this is meant to change at runtime.

pub struct Couple {
	pub first: &'static str,
	pub second: &'static str
}

impl Couple {
	#[must_use]
	pub fn signature(&self) -> String {
		format!("{} & {}", self.first, self.second)
	}
}

pub struct EventDetail {
	pub title: &'static str,
	pub time: &'static str,
	pub venue: &'static str
}

pub const COUPLE: Couple = Couple {
	first: "Ayla",
	second: "Raka"
};

pub const YEAR: u16 = 2025;
pub const DATE: &str = "Sabtu, 21 Desember 2025";
pub const MAIN_VENUE: &str = "Gedung Serbaguna Nusantara, Jakarta";

pub const KICKER: &str = "Undangan Pernikahan";
pub const OPEN_INVITATION: &str = "Buka Undangan";
pub const GREETING: &str = "Dengan penuh sukacita, kami mengundang Anda untuk hadir dan berbagi momen bahagia dalam pernikahan kami.";

/// Handed as-is to the 3D viewer; we never look inside it.
pub const SCENE_URL: &str = "https://prod.spline.design/ESO6PnMadasO0hU3/scene.splinecode";

pub const DETAILS_TITLE: &str = "Detail Acara";
pub const DETAILS_SUBTITLE: &str = "Kami menantikan kehadiran Anda dalam rangkaian acara berikut.";

pub const EVENTS: [EventDetail; 2] = [
	EventDetail {
		title: "Akad Nikah",
		time: "09.00 - 10.00 WIB",
		venue: "Masjid Al-Ikhlas, Jakarta"
	},
	EventDetail {
		title: "Resepsi",
		time: "11.00 - 14.00 WIB",
		venue: "Gedung Serbaguna Nusantara"
	}
];

pub const GALLERY_TITLE: &str = "Galeri";
pub const GALLERY_SUBTITLE: &str = "Kilasan momen kebersamaan kami.";

const GALLERY_PHOTO: &str = "https://images.unsplash.com/photo-1522673607200-164d1b6ce486?q=80&w=1200&auto=format&fit=crop";

// six tiles, all the same photo for now
pub const GALLERY: [&str; 6] = [GALLERY_PHOTO; 6];

pub const RSVP_TITLE: &str = "Konfirmasi Kehadiran";
pub const RSVP_SUBTITLE: &str = "Mohon isi konfirmasi agar kami dapat menyiapkan yang terbaik untuk Anda.";
pub const RSVP_NAME_PLACEHOLDER: &str = "Nama Lengkap";
pub const RSVP_SUBMIT: &str = "Kirim RSVP";
pub const RSVP_NOTE: &str = "Catatan: Form ini hanya simulasi tampilan.";

#[must_use]
pub fn footer_line() -> String {
	format!("Dengan cinta, {} \u{2022} {YEAR}", COUPLE.signature())
}
