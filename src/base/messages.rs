//! Fixed reply texts appended to or sent as bot replies.

/// Signature line appended to every outgoing reply.
pub const SIGNATURE: &str =
    "\n\n^*I'm&nbsp;a&nbsp;bot&nbsp;powered&nbsp;by&nbsp;SongKick,&nbsp;and&nbsp;I&nbsp;dig&nbsp;live&nbsp;music.&nbsp;[Why?](http://deankeinan.com/concertbot)*";

/// Sent when a triggering comment has no usable quoted payload.
pub const BAD_INPUT: &str =
    "Hey there! I couldn't understand what you said.\n\nYou can call me by saying:\n\n !cb \"*Artist Name*\"";

/// Sent when the artist search comes back empty.
pub const NO_RESULTS: &str =
    "Oops! I couldn't find any artists by that name. I'll keep an eye out for them.\n\n";
