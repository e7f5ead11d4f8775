use octavo::{OctavoError, Octree, Percentiles, Point, RankTree, build_order};

#[test]
fn test_empty_batch() {
    assert!(build_order(&[]).unwrap().is_empty());
}

#[test]
fn test_single_point() {
    let points = vec![Point::new(7, -3, 12)];
    assert_eq!(build_order(&points).unwrap(), points);

    let mut tree = Octree::new();
    tree.insert(points[0], "only").unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.depth(), 1);
    assert_eq!(tree.get(&points[0]).unwrap(), &"only");
}

#[test]
fn test_threshold_boundary() {
    // 17 points: below the leaf bucket, emitted verbatim.
    let seventeen: Vec<Point> = (0..17i64).map(|i| Point::new(i, 16 - i, (i * 5) % 17)).collect();
    assert_eq!(build_order(&seventeen).unwrap(), seventeen);

    // 18 points: partitioned, so a central pivot leads the order.
    let eighteen: Vec<Point> = (0..18i64).map(|i| Point::new(i, 17 - i, (i * 5) % 18)).collect();
    let order = build_order(&eighteen).unwrap();
    assert_ne!(order, eighteen);
    let mut sorted_order = order.clone();
    sorted_order.sort();
    let mut sorted_input = eighteen.clone();
    sorted_input.sort();
    assert_eq!(sorted_order, sorted_input);
}

#[test]
fn test_duplicate_point_in_batch() {
    let mut points: Vec<Point> = (0..30i64).map(|i| Point::new(i, -i, i * 2)).collect();
    points.push(Point::new(11, -11, 22));
    assert!(matches!(
        build_order(&points),
        Err(OctavoError::DuplicateKey(_))
    ));
}

#[test]
fn test_diagonal_cloud() {
    // Fully degenerate: every point on the main diagonal. The pivot is
    // always inside its own axis bands, so the build still succeeds.
    let points: Vec<Point> = (0..50i64).map(|i| Point::new(i, i, i)).collect();
    let order = build_order(&points).unwrap();

    let mut tree = Octree::new();
    for point in &order {
        tree.insert(*point, ()).unwrap();
    }
    assert_eq!(tree.len(), 50);
    for point in &points {
        assert!(tree.contains(point));
    }
}

#[test]
fn test_negative_and_extreme_coordinates() {
    let points = vec![
        Point::new(i64::MIN, 0, i64::MAX),
        Point::new(i64::MAX, i64::MIN, -1),
        Point::new(0, i64::MAX, i64::MIN),
        Point::new(-1, -1, -1),
        Point::new(1, 1, 1),
    ];
    // Below the leaf bucket: order passes through, inserts still route.
    let order = build_order(&points).unwrap();
    assert_eq!(order, points);

    let mut tree = Octree::new();
    for (i, point) in order.iter().enumerate() {
        tree.insert(*point, i).unwrap();
    }
    for (i, point) in points.iter().enumerate() {
        assert_eq!(tree.get(point).unwrap(), &i);
    }
}

#[test]
fn test_empty_octree_lookups() {
    let tree: Octree<()> = Octree::new();
    assert!(matches!(
        tree.get(&Point::new(0, 0, 0)),
        Err(OctavoError::KeyNotFound(_))
    ));
    assert!(!tree.contains(&Point::new(0, 0, 0)));
    assert!(tree.node(&Point::new(0, 0, 0)).is_none());
}

#[test]
fn test_rank_tree_drains_to_empty() {
    let mut tree = RankTree::new();
    for key in [5i64, 2, 8, 1, 9, 4] {
        tree.insert(key, ()).unwrap();
    }
    for key in [5i64, 2, 8, 1, 9, 4] {
        tree.remove(&key).unwrap();
    }
    assert!(tree.is_empty());
    assert!(matches!(
        tree.remove(&5),
        Err(OctavoError::KeyNotFound(_))
    ));
}

#[test]
fn test_percentile_band_on_singleton() {
    let mut index = Percentiles::new();
    index.add(42i64).unwrap();
    // ceil(1 * 0.125) = 1 trimmed from the bottom: rank 2 of 1 elements.
    assert!(matches!(
        index.band(12.5, 12.5),
        Err(OctavoError::RankOutOfRange { .. })
    ));
    // With no trim the single key is its own band.
    assert_eq!(index.band(0.0, 0.0).unwrap(), vec![42]);
}