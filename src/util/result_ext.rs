pub trait ResultExt<T, E> {
	fn ok_or_log(self) -> Option<T>
	where
		E: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
	#[track_caller]
	fn ok_or_log(self) -> Option<T>
	where
		E: std::fmt::Display,
	{
		let location = std::panic::Location::caller();
		self
			.inspect_err(|err| tracing::warn!(%location, "{}", err))
			.ok()
	}
}
