use crate::codecs::error::WindowError;
use crate::codecs::integer::{int24_from_raw, read_uint24};
use crate::codecs::minifloat::{BFLOAT16, FLOAT16};
use crate::codecs::number::format_number;
use crate::codecs::pokemon::pokemon_glyph;
use crate::codecs::reader::{ByteOrder, WindowReader};
use crate::codecs::text::{first_utf8_char, first_utf16_char};

pub(super) fn binary(reader: &WindowReader<'_>, _: ByteOrder) -> Result<String, WindowError> {
    Ok(format!("{:08b}", reader.read_u8()?))
}

pub(super) fn octal(reader: &WindowReader<'_>, _: ByteOrder) -> Result<String, WindowError> {
    Ok(format!("{:03o}", reader.read_u8()?))
}

pub(super) fn uint8(reader: &WindowReader<'_>, _: ByteOrder) -> Result<String, WindowError> {
    Ok(reader.read_u8()?.to_string())
}

pub(super) fn int8(reader: &WindowReader<'_>, _: ByteOrder) -> Result<String, WindowError> {
    Ok(reader.read_i8()?.to_string())
}

pub(super) fn uint16(reader: &WindowReader<'_>, order: ByteOrder) -> Result<String, WindowError> {
    Ok(reader.read_u16(order)?.to_string())
}

pub(super) fn int16(reader: &WindowReader<'_>, order: ByteOrder) -> Result<String, WindowError> {
    Ok(reader.read_i16(order)?.to_string())
}

pub(super) fn uint24(reader: &WindowReader<'_>, order: ByteOrder) -> Result<String, WindowError> {
    Ok(read_uint24(reader.bytes(), order)?.to_string())
}

pub(super) fn int24(reader: &WindowReader<'_>, order: ByteOrder) -> Result<String, WindowError> {
    let raw = read_uint24(reader.bytes(), order)?;
    Ok(int24_from_raw(raw).to_string())
}

pub(super) fn uint32(reader: &WindowReader<'_>, order: ByteOrder) -> Result<String, WindowError> {
    Ok(reader.read_u32(order)?.to_string())
}

pub(super) fn int32(reader: &WindowReader<'_>, order: ByteOrder) -> Result<String, WindowError> {
    Ok(reader.read_i32(order)?.to_string())
}

pub(super) fn int64(reader: &WindowReader<'_>, order: ByteOrder) -> Result<String, WindowError> {
    Ok(reader.read_i64(order)?.to_string())
}

pub(super) fn uint64(reader: &WindowReader<'_>, order: ByteOrder) -> Result<String, WindowError> {
    Ok(reader.read_u64(order)?.to_string())
}

pub(super) fn float16(reader: &WindowReader<'_>, order: ByteOrder) -> Result<String, WindowError> {
    Ok(format_number(FLOAT16.decode(reader.read_u16(order)?)))
}

pub(super) fn bfloat16(reader: &WindowReader<'_>, order: ByteOrder) -> Result<String, WindowError> {
    Ok(format_number(BFLOAT16.decode(reader.read_u16(order)?)))
}

pub(super) fn float32(reader: &WindowReader<'_>, order: ByteOrder) -> Result<String, WindowError> {
    Ok(format_number(f64::from(reader.read_f32(order)?)))
}

pub(super) fn float64(reader: &WindowReader<'_>, order: ByteOrder) -> Result<String, WindowError> {
    Ok(format_number(reader.read_f64(order)?))
}

pub(super) fn utf8(reader: &WindowReader<'_>, _: ByteOrder) -> Result<String, WindowError> {
    Ok(first_utf8_char(reader.bytes()))
}

pub(super) fn utf16(reader: &WindowReader<'_>, order: ByteOrder) -> Result<String, WindowError> {
    Ok(first_utf16_char(reader.bytes(), order))
}

pub(super) fn pokemon(reader: &WindowReader<'_>, _: ByteOrder) -> Result<String, WindowError> {
    Ok(pokemon_glyph(reader.read_u8()?).to_string())
}
