//! Owned values, serde and base64 transport of finished struct bytes.

use flatbuf_base64::{parse_base64_vector, print_base64_vector, Base64Mode, Base64Options};
use flatbuf_buffers::Builder;
use flatbuf_structs::my_game::{
    create_transformation, PolarPoint, PolarPointT, Transformation, TransformationT,
};
use flatbuf_structs::Struct;
use serde_json::json;

#[test]
fn pack_then_unpack() {
    let value = PolarPointT {
        mag: 2.5,
        arg: 0.75,
    };
    let mut b = Builder::new();
    let offset = value.pack(&mut b).unwrap();
    assert_eq!(PolarPoint::follow(b.finished_data(), offset).unpack(), value);
}

#[test]
fn mixed_structs_in_one_builder() {
    let mut b = Builder::new();
    let p = PolarPointT { mag: 1.0, arg: 2.0 }.pack(&mut b).unwrap();
    let t = create_transformation(&mut b, 3.0, 4.0).unwrap();
    let data = b.finished_data();
    assert_eq!(data.len(), 16);
    assert_eq!(
        Transformation::follow(data, t).unpack(),
        TransformationT {
            scale: 3.0,
            angle: 4.0
        }
    );
    assert_eq!(PolarPoint::follow(data, p).unpack(), PolarPointT { mag: 1.0, arg: 2.0 });
}

#[test]
fn object_types_serialize_as_json() {
    let value = PolarPointT {
        mag: 1.5,
        arg: -2.25,
    };
    assert_eq!(serde_json::to_value(value).unwrap(), json!({"mag": 1.5, "arg": -2.25}));
    let back: TransformationT = serde_json::from_value(json!({"scale": 0.5, "angle": 1.0})).unwrap();
    assert_eq!(
        back,
        TransformationT {
            scale: 0.5,
            angle: 1.0
        }
    );
}

#[test]
fn default_object_is_zeroed() {
    let mut b = Builder::new();
    PolarPointT::default().pack(&mut b).unwrap();
    assert_eq!(b.finished_data(), &[0u8; 8]);
}

#[test]
fn finished_bytes_survive_base64_transport() {
    let mut b = Builder::new();
    let offset = PolarPointT {
        mag: 1.5,
        arg: -2.25,
    }
    .pack(&mut b)
    .unwrap();
    let pos = b.position_of(offset);
    let bytes = b.into_vec();

    let quoted = print_base64_vector(Base64Mode::UrlSafe, &bytes, &Base64Options::default())
        .expect("non-empty vector");
    assert_eq!(quoted, "\"AADAPwAAEMA=\"");

    let decoded = parse_base64_vector(Base64Mode::UrlSafe, quoted.trim_matches('"')).unwrap();
    let point = PolarPoint::init(&decoded, pos);
    assert_eq!(point.mag(), 1.5);
    assert_eq!(point.arg(), -2.25);
}
