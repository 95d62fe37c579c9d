//! dnstap protobuf schema (proto2), expressed with `prost` derives.
//!
//! `Dnstap` and `Message` fields 1-14 keep the numbering of `dnstap.proto`; the question
//! fields carried alongside them use tags 20-22.

/// Top-level envelope of a dnstap payload.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Dnstap {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub identity: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub version: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "3")]
    pub extra: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(enumeration = "dnstap::Type", required, tag = "15")]
    pub r#type: i32,
    #[prost(message, optional, tag = "14")]
    pub message: ::core::option::Option<Message>,
}

pub mod dnstap {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        Message = 1,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Message {
    #[prost(enumeration = "message::Type", required, tag = "1")]
    pub r#type: i32,
    #[prost(enumeration = "SocketFamily", optional, tag = "2")]
    pub socket_family: ::core::option::Option<i32>,
    #[prost(enumeration = "SocketProtocol", optional, tag = "3")]
    pub socket_protocol: ::core::option::Option<i32>,
    #[prost(bytes = "vec", optional, tag = "4")]
    pub query_address: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "5")]
    pub response_address: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(uint32, optional, tag = "6")]
    pub query_port: ::core::option::Option<u32>,
    #[prost(uint32, optional, tag = "7")]
    pub response_port: ::core::option::Option<u32>,
    #[prost(uint64, optional, tag = "8")]
    pub query_time_sec: ::core::option::Option<u64>,
    #[prost(fixed32, optional, tag = "9")]
    pub query_time_nsec: ::core::option::Option<u32>,
    #[prost(bytes = "vec", optional, tag = "10")]
    pub query_message: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "11")]
    pub query_zone: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(uint64, optional, tag = "12")]
    pub response_time_sec: ::core::option::Option<u64>,
    #[prost(fixed32, optional, tag = "13")]
    pub response_time_nsec: ::core::option::Option<u32>,
    #[prost(bytes = "vec", optional, tag = "14")]
    pub response_message: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "20")]
    pub query_name: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(uint32, optional, tag = "21")]
    pub query_class: ::core::option::Option<u32>,
    #[prost(uint32, optional, tag = "22")]
    pub query_type: ::core::option::Option<u32>,
}

pub mod message {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        AuthQuery = 1,
        AuthResponse = 2,
        ResolverQuery = 3,
        ResolverResponse = 4,
        ClientQuery = 5,
        ClientResponse = 6,
        ForwarderQuery = 7,
        ForwarderResponse = 8,
        StubQuery = 9,
        StubResponse = 10,
        ToolQuery = 11,
        ToolResponse = 12,
        UpdateQuery = 13,
        UpdateResponse = 14,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SocketFamily {
    Inet = 1,
    Inet6 = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SocketProtocol {
    Udp = 1,
    Tcp = 2,
    Dot = 3,
    Doh = 4,
    DnsCryptUdp = 5,
    DnsCryptTcp = 6,
    Doq = 7,
}
