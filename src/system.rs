//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.
//!
//! Panels only need one thing from the system: the current time, which
//! seeds the anchor when no value has been supplied.

#[cfg(any(target_os = "macos", target_os = "ios"))]
extern {
    fn gettimeofday(tp: *mut libc::timeval, tzp: *mut libc::c_void) -> libc::c_int;
}


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
#[cfg(any(target_os = "macos", target_os = "ios"))]
pub(crate) unsafe fn sys_time() -> (i64, i16) {
    use std::ptr::null_mut;

    let mut tv = libc::timeval { tv_sec: 0, tv_usec: 0 };
    let _ = gettimeofday(&mut tv, null_mut());
    (tv.tv_sec as i64, (tv.tv_usec / 1000) as i16)
}

#[cfg(windows)] use winapi::shared::minwindef::FILETIME;
#[cfg(windows)] const HECTONANOSECS_IN_SEC: i64 = 10_000_000;
#[cfg(windows)] const HECTONANOSEC_TO_UNIX_EPOCH: i64 = 11_644_473_600 * HECTONANOSECS_IN_SEC;

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
#[cfg(windows)]
pub(crate) unsafe fn sys_time() -> (i64, i16) {
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;

    let mut ft: FILETIME = std::mem::zeroed();
    GetSystemTimeAsFileTime(&mut ft);

    let hectonanos = (((ft.dwHighDateTime as u64) << 32) | (ft.dwLowDateTime as u64)) as i64;
    let since_epoch = hectonanos - HECTONANOSEC_TO_UNIX_EPOCH;
    (since_epoch / HECTONANOSECS_IN_SEC, ((since_epoch % HECTONANOSECS_IN_SEC) / 10_000) as i16)
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
#[cfg(not(any(target_os = "macos", target_os = "ios", windows)))]
pub(crate) unsafe fn sys_time() -> (i64, i16) {
    let mut tv = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    let _ = libc::clock_gettime(libc::CLOCK_REALTIME, &mut tv);
    (tv.tv_sec as i64, (tv.tv_nsec / 1_000_000) as i16)
}
