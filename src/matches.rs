macro_rules! byte_map {
    // ===== 256 lookup table =====
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident:$u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: $u8) -> bool {
            static PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            // SAFETY: the pattern size is equal to u8::MAX
            unsafe { *PAT.as_ptr().add($byte as usize) }
        }
    };
}

pub(crate) use {byte_map};

// ===== Blocks =====

byte_map! {
    /// token   = 1*tchar
    /// tchar   = "!" / "#" / "$" / "%" / "&" / "'" / "*"
    ///         / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
    ///         / DIGIT / ALPHA
    #[inline(always)]
    pub const fn is_token(byte: u8) {
        matches!(
            byte,
            | b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*'
            | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~'
        )
        || byte.is_ascii_alphanumeric()
    }
}

byte_map! {
    /// field-content = VCHAR, plus SP / HTAB between tokens
    ///
    /// non-ASCII (obs-text) is not supported
    #[inline(always)]
    pub const fn is_header_value(byte: u8) {
        matches!(byte, b'\t' | b' '..=b'~')
    }
}
