// navscroll services
// The restore service wraps the managers behind a serial event loop.

pub mod restore_service;
