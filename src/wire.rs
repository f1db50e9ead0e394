use bytes::{Buf, BufMut, Bytes, BytesMut};
use prost::Message;

pub use prost::{DecodeError, EncodeError};

pub fn encode<M>(message: &M) -> Bytes
where
    M: Message,
{
    let mut buf = BytesMut::with_capacity(message.encoded_len());
    message
        .encode(&mut buf)
        .expect("buffer reserved for encoded_len bytes");
    buf.freeze()
}

pub fn encode_into<M, B>(message: &M, buf: &mut B) -> Result<(), EncodeError>
where
    M: Message,
    B: BufMut,
{
    message.encode(buf)
}

pub fn decode<M, B>(buf: B) -> Result<M, DecodeError>
where
    M: Message + Default,
    B: Buf,
{
    M::decode(buf)
}
