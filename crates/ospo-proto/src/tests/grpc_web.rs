use crate::grpc_web::{
    Frame, STATUS_HEADER, Trailers, decode_frames, decode_unary, encode_message, encode_trailers,
};
use crate::{
    GetAuthoredProjectsResponse, GetRequestsResponse, Request, SubmitAccessRequestResponse,
};

use bytes::{BufMut, Bytes, BytesMut};
use googletest::prelude::*;
use prost::Message;

fn ok_trailers() -> Trailers {
    let mut trailers = Trailers::default();
    trailers.insert(STATUS_HEADER, "0");
    trailers
}

fn body(parts: &[Bytes]) -> Bytes {
    let mut buf = BytesMut::new();
    for part in parts {
        buf.put_slice(part);
    }
    buf.freeze()
}

#[test]
fn given_message_when_encode_then_length_prefixed_data_frame() {
    // Given
    let response = SubmitAccessRequestResponse {
        request_id: "abc".to_string(),
        message: "ok".to_string(),
    };

    // When
    let frame = encode_message(&response).unwrap();

    // Then
    assert_that!(frame[0], eq(0x00));
    let len = u32::from_be_bytes([frame[1], frame[2], frame[3], frame[4]]) as usize;
    assert_that!(len, eq(frame.len() - 5));
}

#[test]
fn given_data_and_trailer_frames_when_decode_unary_then_message_and_status() {
    // Given
    let response = GetRequestsResponse {
        requests: vec![Request {
            id: "req-1".to_string(),
            r#type: "project".to_string(),
            title: "Test Project Request".to_string(),
            status: "pending".to_string(),
            requester_id: "USER001".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            project_name: "Test Project".to_string(),
        }],
        total: 1,
    };
    let payload = body(&[
        encode_message(&response).unwrap(),
        encode_trailers(&ok_trailers()).unwrap(),
    ]);

    // When
    let decoded = decode_unary::<GetRequestsResponse>(payload).unwrap();

    // Then
    assert_that!(decoded.message.as_ref(), some(eq(&response)));
    let status = decoded.trailers.status().unwrap();
    assert!(status.is_ok());
}

#[test]
fn given_trailers_only_body_when_decode_unary_then_no_message() {
    // Given
    let mut trailers = Trailers::default();
    trailers.insert("grpc-status", "5");
    trailers.insert("grpc-message", "user not found");
    let payload = encode_trailers(&trailers).unwrap();

    // When
    let decoded = decode_unary::<GetRequestsResponse>(payload).unwrap();

    // Then
    assert!(decoded.message.is_none());
    let status = decoded.trailers.status().unwrap();
    assert_that!(status.code, eq(5));
    assert_that!(status.message.as_str(), eq("user not found"));
}

#[test]
fn given_mixed_case_trailer_block_when_parse_then_keys_lowercased() {
    let trailers = Trailers::parse(b"Grpc-Status: 13\r\nGrpc-Message: internal\r\n");

    assert_that!(trailers.get("grpc-status"), some(eq("13")));
    assert_that!(trailers.get("GRPC-MESSAGE"), some(eq("internal")));
}

#[test]
fn given_truncated_header_when_decode_then_error() {
    let result = decode_frames(Bytes::from_static(&[0x00, 0x00, 0x00]));

    assert_that!(result, err(anything()));
}

#[test]
fn given_truncated_payload_when_decode_then_error() {
    let result = decode_frames(Bytes::from_static(&[0x00, 0x00, 0x00, 0x00, 0x09, 0x01]));

    assert_that!(result, err(anything()));
}

#[test]
fn given_compressed_flag_when_decode_then_error() {
    let result = decode_frames(Bytes::from_static(&[0x01, 0x00, 0x00, 0x00, 0x00]));

    assert_that!(result, err(anything()));
}

#[test]
fn given_empty_body_when_decode_then_no_frames() {
    let frames = decode_frames(Bytes::new()).unwrap();

    assert!(frames.is_empty());
}

#[test]
fn given_trailer_frame_when_decode_frames_then_trailers_variant() {
    let frames = decode_frames(encode_trailers(&ok_trailers()).unwrap()).unwrap();

    assert_eq!(frames, vec![Frame::Trailers(ok_trailers())]);
}

#[test]
fn given_wire_bytes_when_decoding_authored_projects_then_fields_by_tag() {
    // Project { id: "p1" (1), status: "active" (4), owner_id: "u1" (8) }
    let mut project = vec![0x0a, 0x02, b'p', b'1', 0x22, 0x06];
    project.extend_from_slice(b"active");
    project.extend_from_slice(&[0x42, 0x02, b'u', b'1']);

    // { projects: [project] (1), total: 1 (2) }
    let mut wire = vec![0x0a, project.len() as u8];
    wire.extend_from_slice(&project);
    wire.extend_from_slice(&[0x10, 0x01]);

    let response = GetAuthoredProjectsResponse::decode(wire.as_slice()).unwrap();

    assert_that!(response.total, eq(1));
    assert_that!(response.projects.len(), eq(1));
    assert_that!(response.projects[0].id.as_str(), eq("p1"));
    assert_that!(response.projects[0].status.as_str(), eq("active"));
    assert_that!(response.projects[0].owner_id.as_str(), eq("u1"));
    assert_that!(response.projects[0].name.as_str(), eq(""));
}
