pub mod csrf_guard;
