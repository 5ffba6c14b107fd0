//! Fixed capacity collection of pictures.

use log::debug;

use super::{
	config::EngineConfig,
	error::PictureError,
	host::PictureHost,
	instance::Picture,
	render::RenderParams,
	source::PictureSource,
	types::PicturePointer,
};

/// Indexed slots of optional pictures, driven by the host tick
///
/// # Examples
///
/// ```
/// use wwapic_types::picture::{NullHost, PicturePointer, PictureSource, PictureStore};
///
/// # fn main() -> Result<(), wwapic_types::picture::PictureError> {
/// let mut store = PictureStore::new(5);
/// let source = PictureSource::new(PicturePointer::new(10, 0));
/// store.create_picture(0, source, ["pos=0,0", "anim_straight=2,0"])?;
/// store.start(&mut NullHost);
/// store.update(&mut NullHost);
/// assert_eq!(store.get_picture(0)?.map(|p| p.pos().x), Some(2.0));
/// assert!(store.get_picture(5).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PictureStore {
	pictures: Vec<Option<Picture>>,
	config: EngineConfig,
}

impl PictureStore {
	/// Creates a store with `capacity` empty slots and the default configuration
	pub fn new(capacity: usize) -> Self {
		Self::with_config(EngineConfig::default().with_store_capacity(capacity))
	}

	/// Creates a store sized and timed by `config`
	pub fn with_config(config: EngineConfig) -> Self {
		Self {
			pictures: vec![None; config.store_capacity],
			config,
		}
	}

	/// Number of slots
	pub fn capacity(&self) -> usize {
		self.pictures.len()
	}

	/// Number of occupied slots
	pub fn occupied(&self) -> usize {
		self.pictures.iter().flatten().count()
	}

	/// Configuration shared by the pictures created here
	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	fn check_id(&self, id: usize) -> Result<usize, PictureError> {
		if id < self.pictures.len() {
			Ok(id)
		} else {
			Err(PictureError::IndexOutOfRange {
				id,
				capacity: self.pictures.len(),
			})
		}
	}

	/// Returns `true` when slot `id` holds no picture
	pub fn is_empty(&self, id: usize) -> Result<bool, PictureError> {
		Ok(self.pictures[self.check_id(id)?].is_none())
	}

	/// Stores `picture` in slot `id`, replacing any previous picture
	pub fn set_picture(&mut self, id: usize, picture: Picture) -> Result<(), PictureError> {
		let id = self.check_id(id)?;
		if self.pictures[id].replace(picture).is_some() {
			debug!("Picture slot {id} overwritten");
		}
		Ok(())
	}

	/// Builds a picture from its script and stores it in slot `id`
	///
	/// The slot is only touched once the whole script was accepted.
	pub fn create_picture<I, S>(
		&mut self,
		id: usize,
		source: PictureSource,
		lines: I,
	) -> Result<&mut Picture, PictureError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let id = self.check_id(id)?;
		let picture = Picture::from_lines(source, self.config, lines)?;
		Ok(self.pictures[id].insert(picture))
	}

	/// Clears slot `id`, returning the picture it held
	pub fn remove_picture(&mut self, id: usize) -> Result<Option<Picture>, PictureError> {
		let id = self.check_id(id)?;
		Ok(self.pictures[id].take())
	}

	/// Picture in slot `id`
	pub fn get_picture(&self, id: usize) -> Result<Option<&Picture>, PictureError> {
		Ok(self.pictures[self.check_id(id)?].as_ref())
	}

	/// Mutable picture in slot `id`
	pub fn get_picture_mut(&mut self, id: usize) -> Result<Option<&mut Picture>, PictureError> {
		let id = self.check_id(id)?;
		Ok(self.pictures[id].as_mut())
	}

	/// Starts the picture in slot `id`; an empty slot is left alone
	pub fn start_picture(
		&mut self,
		id: usize,
		host: &mut impl PictureHost,
	) -> Result<(), PictureError> {
		if let Some(picture) = self.get_picture_mut(id)? {
			picture.start(host);
		}
		Ok(())
	}

	/// Starts every picture in index order
	pub fn start(&mut self, host: &mut impl PictureHost) {
		for picture in self.pictures.iter_mut().flatten() {
			picture.start(host);
		}
	}

	/// Stops every picture in index order
	pub fn stop(&mut self, host: &mut impl PictureHost) {
		for picture in self.pictures.iter_mut().flatten() {
			picture.stop(host);
		}
	}

	/// Advances every picture by one tick
	///
	/// Returns the `next` pointers of the pictures that timed out during this
	/// tick, in slot order.
	pub fn update(&mut self, host: &mut impl PictureHost) -> Vec<PicturePointer> {
		let tick_ms = self.config.tick_ms;
		let mut next = Vec::new();
		for picture in self.pictures.iter_mut().flatten() {
			if picture.update(tick_ms, host) {
				next.extend(picture.next_pictures());
			}
		}
		next
	}

	/// Occupied slots with their ids
	pub fn iter(&self) -> impl Iterator<Item = (usize, &Picture)> {
		self.pictures
			.iter()
			.enumerate()
			.filter_map(|(id, slot)| slot.as_ref().map(|picture| (id, picture)))
	}

	/// Draw parameters of every visible picture with its slot id
	pub fn render_all(&self) -> Vec<(usize, RenderParams)> {
		self.iter()
			.filter_map(|(id, picture)| picture.render().map(|params| (id, params)))
			.collect()
	}
}
