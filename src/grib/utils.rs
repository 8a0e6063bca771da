use std::marker;
use std::ops::{BitOr, Shl};
use num::FromPrimitive;

/// Big-endian accumulation of an arbitrary-length byte span into an
/// unsigned integer. Spans in this format are at most 7 bytes, so the
/// result always fits in a u64.
pub(crate) fn as_unsigned(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0u64, |n, b| n * 256 + u64::from(*b))
}

/// Regulation 92.1.5 sign-magnitude integers: the top bit carries the
/// sign, the remaining bits the magnitude. Not two's complement.
pub(crate) trait GribInt<I> {
    fn as_grib_int(&self) -> I;
}

macro_rules! add_impl_for_ints {
    ($(($ty_src:ty, $ty_dst:ty),)*) => ($(
        impl GribInt<$ty_dst> for $ty_src {
            fn as_grib_int(&self) -> $ty_dst {
                if self.leading_zeros() == 0 {
                    let abs = (self << 1 >> 1) as $ty_dst;
                    -abs
                } else {
                    *self as $ty_dst
                }
            }
        }
    )*);
}

add_impl_for_ints! {
    (u16, i16),
    (u32, i32),
}

/// Yields consecutive `size`-bit big-endian codewords from a byte slice.
/// Stops once fewer than `size` bits remain.
pub(crate) struct BitwiseIterator<'a, T> {
    slice: &'a [u8],
    size: usize,
    bit_pos: usize,
    _marker: marker::PhantomData<T>,
}

impl<'a, T> BitwiseIterator<'a, T> {
    pub(crate) fn new(slice: &'a [u8], size: usize) -> Self {
        Self {
            slice,
            size,
            bit_pos: 0,
            _marker: Default::default(),
        }
    }
}

impl<'a, T> Iterator for BitwiseIterator<'a, T>
where
    T: FromPrimitive + Shl<usize, Output = T> + BitOr<Output = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let end = self.bit_pos + self.size;
        if self.size == 0 || end > self.slice.len() * 8 {
            return None;
        }

        let mut val = T::from_u8(0).expect("casted from u8");
        for bit in self.bit_pos..end {
            let b = (self.slice[bit / 8] >> (7 - bit % 8)) & 1;
            val = (val << 1) | T::from_u8(b).expect("casted from u8");
        }

        self.bit_pos = end;
        Some(val)
    }
}

pub(crate) struct Buffer<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Buffer<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub(crate) fn read<T: EndianRead>(&mut self) -> T {
        let end = self.pos + std::mem::size_of::<T>();
        let val = T::from_be_bytes(&self.bytes[self.pos..end]);
        self.pos = end;

        val
    }
}

pub(crate) trait EndianRead {
    fn from_be_bytes(bytes: &[u8]) -> Self;
}

macro_rules! uint_impl {
    ($ty:ty) => {
        impl EndianRead for $ty {
            fn from_be_bytes(bytes: &[u8]) -> Self {
                <$ty>::from_be_bytes(bytes.try_into().unwrap())
            }
        }
    };
}

uint_impl! { u8 }
uint_impl! { u16 }
uint_impl! { u32 }

uint_impl! { f32 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_accumulates_big_endian() {
        assert_eq!(as_unsigned(&[0x01, 0x00]), 256);
        assert_eq!(as_unsigned(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x10]), 528);
        assert_eq!(as_unsigned(&[]), 0);
    }

    #[test]
    fn grib_int_clears_sign_bit_and_negates() {
        assert_eq!(u16::from_be_bytes([0x80, 0x01]).as_grib_int(), -1);
        assert_eq!(u16::from_be_bytes([0x00, 0x01]).as_grib_int(), 1);
        assert_eq!(u32::from_be_bytes([0x80, 0x00, 0x00, 0x2a]).as_grib_int(), -42);
    }

    #[test]
    fn bitwise_iterator_reads_msb_first() {
        let bytes = [0b1010_1100, 0b0101_0000];
        let words: Vec<u32> = BitwiseIterator::new(&bytes, 6).collect();
        assert_eq!(words, vec![0b101011, 0b000101]);
    }

    #[test]
    fn bitwise_iterator_stops_on_partial_codeword() {
        let bytes = [0xff, 0xff];
        let words: Vec<u32> = BitwiseIterator::new(&bytes, 7).collect();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn buffer_reads_sequentially() {
        let bytes = [0x40, 0x49, 0x0f, 0xdb, 0x80, 0x02, 0x08];
        let mut buf = Buffer::new(&bytes);
        assert!((buf.read::<f32>() - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(buf.read::<u16>().as_grib_int(), -2);
        assert_eq!(buf.read::<u8>(), 8);
    }
}
